// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor Y subscribers (a diferencia de un clon
/// estructural: todos los handles observan las mismas mutaciones).
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Obtener referencia al valor interno
    pub fn get(&self) -> Rc<RefCell<T>> {
        self.value.clone()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Leer el valor sin retener el borrow
    pub fn with<F, R>(&self, reader: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        reader(&self.value.borrow())
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    fn notify(&self) {
        // Clonar primero: un subscriber puede a su vez leer el estado
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_all_subscribers() {
        let state = ReactiveState::new(0u32);
        let fired = Rc::new(Cell::new(0u32));

        let fired_a = fired.clone();
        state.subscribe(move || fired_a.set(fired_a.get() + 1));
        let fired_b = fired.clone();
        state.subscribe(move || fired_b.set(fired_b.get() + 1));

        state.set(5);
        assert_eq!(fired.get(), 2);
        assert_eq!(*state.get().borrow(), 5);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::from("a"));
        let clone = state.clone();
        let fired = Rc::new(Cell::new(false));

        let fired_c = fired.clone();
        state.subscribe(move || fired_c.set(true));

        clone.set(String::from("b"));
        assert!(fired.get());
        assert_eq!(state.with(|v| v.clone()), "b");
    }
}
