pub mod alias;
pub mod error;
pub mod linked_lists;
pub mod scenario;

pub use alias::{adjust, Alias};
pub use error::{AllocationError, NullDereferenceError, ScenarioError};
pub use linked_lists::SinglyLinkedList;
