//! Order intake: collect a project request, validate it, turn it into a
//! readable message and hand it off to an external messaging app.

pub mod channel;
pub mod error;
pub mod flow;
pub mod message;
pub mod request;

pub use channel::{DeliveryChannel, ExternalHandoff};
pub use error::HandoffError;
pub use flow::{FlowStage, OrderAction, OrderFlow};
pub use request::{OrderField, BUDGET_TIERS, SERVICE_TYPES};
