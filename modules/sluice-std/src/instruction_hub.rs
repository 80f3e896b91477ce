
mod instruction_hub_impl;
mod instruction_subscription;

pub use instruction_hub_impl::InstructionHub;
pub use instruction_subscription::InstructionSubscription;
