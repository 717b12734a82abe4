// ============================================================================
// NOTIFICATION POLLER - Polling de notificaciones con cadencia fija
// ============================================================================
// Ciclo Idle → Polling → Scheduled: un solo poll en vuelo; el delay de 30s
// se mide desde que TERMINA el poll anterior (Timeout re-armado, no un
// Interval libre), así una respuesta lenta nunca acumula backlog.
// El poller es dueño exclusivo del snapshot; el resto de la app solo lee.
// ============================================================================

use crate::models::Notification;
use crate::services::{ApiClient, ApiError};
use crate::state::SessionState;
use crate::utils::audio::{play_sound, resolve_sound_asset};
use crate::utils::constants::NOTIFICATION_POLL_INTERVAL_MS;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Bandeja de notificaciones: snapshot + detección de novedad.
/// Novedad == crecimiento de tamaño entre polls. Un snapshot del mismo
/// tamaño con ids distintos NO cuenta como novedad (comportamiento
/// observado del cliente original, conservado a propósito).
#[derive(Debug, Default)]
pub struct NotificationInbox {
    snapshot: Vec<Notification>,
}

impl NotificationInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplazar el snapshot completo (no se mergea).
    /// Devuelve true si el nuevo snapshot trae novedad (creció).
    pub fn replace(&mut self, items: Vec<Notification>) -> bool {
        let novel = items.len() > self.snapshot.len();
        self.snapshot = items;
        novel
    }

    pub fn clear(&mut self) {
        self.snapshot.clear();
    }

    /// Invariante del badge: el contador mostrado == len del snapshot actual
    pub fn count(&self) -> usize {
        self.snapshot.len()
    }

    pub fn items(&self) -> &[Notification] {
        &self.snapshot
    }
}

/// Tarea programada y cancelable, con ciclo de vida atado a la app
#[derive(Clone)]
pub struct NotificationPoller {
    inner: Rc<PollerInner>,
}

struct PollerInner {
    api: ApiClient,
    session: SessionState,
    inbox: RefCell<NotificationInbox>,
    timer: RefCell<Option<Timeout>>,
    running: Cell<bool>,
}

impl NotificationPoller {
    pub fn new(api: ApiClient, session: SessionState) -> Self {
        Self {
            inner: Rc::new(PollerInner {
                api,
                session,
                inbox: RefCell::new(NotificationInbox::new()),
                timer: RefCell::new(None),
                running: Cell::new(false),
            }),
        }
    }

    /// Un poll inmediato y después el ciclo recurrente
    pub fn start(&self) {
        if self.inner.running.get() {
            log::warn!("⚠️ Poller ya iniciado, ignorando start() duplicado");
            return;
        }
        self.inner.running.set(true);
        log::info!("🔔 Iniciando polling de notificaciones (cada {}s)", NOTIFICATION_POLL_INTERVAL_MS / 1000);
        self.spawn_cycle();
    }

    /// Cancelar el timer pendiente; la sesión que nos contiene decide cuándo
    pub fn stop(&self) {
        self.inner.running.set(false);
        self.inner.timer.borrow_mut().take();
    }

    /// Copia del snapshot actual (solo lectura para las vistas)
    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.inbox.borrow().items().to_vec()
    }

    pub fn count(&self) -> usize {
        self.inner.inbox.borrow().count()
    }

    fn spawn_cycle(&self) {
        let poller = self.clone();
        spawn_local(async move {
            poller.poll().await;
            poller.schedule_next();
        });
    }

    /// Re-armar el timer: el delay corre desde la finalización del poll
    fn schedule_next(&self) {
        if !self.inner.running.get() {
            return;
        }
        let poller = self.clone();
        let timeout = Timeout::new(NOTIFICATION_POLL_INTERVAL_MS, move || {
            poller.spawn_cycle();
        });
        *self.inner.timer.borrow_mut() = Some(timeout);
    }

    /// Un poll: fetch del snapshot completo, detección de novedad, badge.
    /// Un fallo deja snapshot y badge intactos; el ciclo continúa igual.
    pub async fn poll(&self) {
        let result = self.inner.api.get_notifications().await;
        if self.apply_poll_result(result) {
            // Badge y snapshot se actualizan en todo poll exitoso,
            // haya novedad o no
            self.update_badge();
        }
    }

    /// Aplicar el resultado de un poll sobre la bandeja. En éxito reemplaza
    /// el snapshot y dispara el cue si hubo novedad; en fallo no toca nada.
    /// Devuelve true si el snapshot fue reemplazado (badge pendiente).
    fn apply_poll_result(&self, result: Result<Vec<Notification>, ApiError>) -> bool {
        match result {
            Ok(items) => {
                let novel = self.inner.inbox.borrow_mut().replace(items);
                if novel {
                    log::info!("🔔 Notificaciones nuevas detectadas");
                    self.play_cue_once();
                }
                true
            }
            Err(e) => {
                log::error!("❌ Error consultando notificaciones: {}", e);
                false
            }
        }
    }

    /// Exactamente una reproducción por ciclo con novedad, sin importar
    /// cuántas notificaciones llegaron
    fn play_cue_once(&self) {
        let prefs = self.inner.session.preferences();
        if !prefs.notifications_enabled {
            return;
        }
        if let Some(src) = resolve_sound_asset(prefs.notification_sound.as_deref()) {
            play_sound(&src);
        }
    }

    fn update_badge(&self) {
        crate::views::notifications::update_badge(self.count());
    }

    /// Marcar leída en el backend y re-sincronizar con un re-poll inmediato
    /// (sin mutación especulativa del snapshot local)
    pub async fn acknowledge(&self, id: i64) -> Result<(), ApiError> {
        self.inner.api.mark_notification_read(id).await?;
        self.poll().await;
        Ok(())
    }

    /// Borrado total: optimista (la operación remota es idempotente y de
    /// bajo riesgo), el snapshot local se vacía sin esperar re-poll
    pub async fn clear_all(&self) -> Result<(), ApiError> {
        self.inner.api.clear_notifications().await?;
        self.inner.inbox.borrow_mut().clear();
        self.update_badge();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use crate::state::Session;

    fn batch(n: usize) -> Vec<Notification> {
        (0..n as i64)
            .map(|id| Notification {
                id,
                kind: NotificationKind::System,
                title: format!("n{}", id),
                message: String::new(),
                created_at: String::new(),
                read: false,
            })
            .collect()
    }

    #[test]
    fn novelty_fires_only_on_growth() {
        // Secuencia de tamaños [0,3,3,5,2]: cue tras los polls 2 y 4,
        // ni en el 3 (sin crecimiento) ni en el 5 (shrink)
        let mut inbox = NotificationInbox::new();
        let cues: Vec<bool> = [0usize, 3, 3, 5, 2]
            .iter()
            .map(|n| inbox.replace(batch(*n)))
            .collect();
        assert_eq!(cues, vec![false, true, false, true, false]);
    }

    #[test]
    fn badge_count_tracks_snapshot_unconditionally() {
        let mut inbox = NotificationInbox::new();
        inbox.replace(batch(5));
        assert_eq!(inbox.count(), 5);
        // Shrink: sin novedad pero el contador SÍ baja
        assert!(!inbox.replace(batch(2)));
        assert_eq!(inbox.count(), 2);
    }

    #[test]
    fn same_size_replacement_is_not_novelty() {
        let mut inbox = NotificationInbox::new();
        inbox.replace(batch(3));
        // Tres notificaciones distintas, mismo tamaño: el detector por
        // longitud no lo ve (limitación conocida, conservada)
        let mut different = batch(3);
        for n in &mut different {
            n.id += 100;
        }
        assert!(!inbox.replace(different));
    }

    #[test]
    fn failed_poll_leaves_snapshot_and_count_untouched() {
        let poller = NotificationPoller::new(
            ApiClient::new(),
            SessionState::from_session(Session::from_persisted(None, None, None)),
        );

        assert!(poller.apply_poll_result(Ok(batch(3))));
        assert_eq!(poller.count(), 3);

        // El fallo no toca la bandeja y reporta que no hay badge que pintar
        let failed = Err(ApiError {
            message: "HTTP 500: Request failed".to_string(),
        });
        assert!(!poller.apply_poll_result(failed));
        assert_eq!(poller.count(), 3);
        assert_eq!(poller.snapshot().len(), 3);

        // El siguiente poll exitoso sigue aplicándose con normalidad
        assert!(poller.apply_poll_result(Ok(batch(5))));
        assert_eq!(poller.count(), 5);
    }

    #[test]
    fn clear_empties_snapshot() {
        let mut inbox = NotificationInbox::new();
        inbox.replace(batch(4));
        inbox.clear();
        assert_eq!(inbox.count(), 0);
        // El siguiente snapshot no vacío vuelve a ser novedad
        assert!(inbox.replace(batch(1)));
    }
}
