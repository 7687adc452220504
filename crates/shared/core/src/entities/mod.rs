mod execution;
mod mode;
mod order;
mod order_status;
mod order_type;
mod position;
mod request;
mod side;

pub use execution::{Execution, ExecutionId};
pub use mode::ExecutionMode;
pub use order::{Order, OrderId};
pub use order_status::OrderStatus;
pub use order_type::OrderType;
pub use position::{PartialExit, Position, PositionId, PositionStatus};
pub use request::OrderRequest;
pub use side::Side;
