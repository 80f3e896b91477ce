mod continuation_predicate;
mod dispatch_mode;
mod dispatch_spawner;
mod instruction_dispatch;
mod instruction_fanout;
mod instruction_handler;
mod instruction_listener;
mod instruction_service;
mod listen_gate;
mod listener_config;
mod queue_instruction_service;

pub use continuation_predicate::ContinuationPredicate;
pub use dispatch_mode::DispatchMode;
pub use dispatch_spawner::DispatchSpawner;
pub use instruction_dispatch::InstructionDispatch;
pub use instruction_fanout::InstructionFanout;
pub use instruction_handler::InstructionHandler;
pub use instruction_listener::InstructionListener;
pub use instruction_service::InstructionService;
pub use listen_gate::ListenGate;
pub use listener_config::ListenerConfig;
pub use queue_instruction_service::QueueInstructionService;
