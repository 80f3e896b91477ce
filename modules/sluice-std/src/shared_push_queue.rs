
mod shared_push_queue_impl;
mod shared_push_subscription;

pub use shared_push_queue_impl::SharedPushQueue;
pub use shared_push_subscription::SharedPushSubscription;
