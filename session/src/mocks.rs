use crate::notify::{Notifier, NotifyKind, NotifyOptions};

mockall::mock! {
    pub NotifierMock {}

    impl Notifier for NotifierMock {
        fn notify(&self, kind: NotifyKind, message: &str, options: NotifyOptions);
    }
}
