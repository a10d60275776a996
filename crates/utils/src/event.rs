use std::sync::{Arc, RwLock};

pub type ChangeHandler = Box<dyn Fn() + Sync + Send>;

/// No-payload change signal. Handlers run synchronously, in subscription
/// order, on the notifying thread.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    handlers: Arc<RwLock<Vec<ChangeHandler>>>,
}

impl ChangeNotifier {
    pub fn subscribe(&self, handler: impl Fn() + Sync + Send + 'static) {
        self.handlers.write().unwrap().push(Box::new(handler));
    }

    pub fn notify(&self) {
        for handler in &*self.handlers.read().unwrap() {
            handler();
        }
    }
}
