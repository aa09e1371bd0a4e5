//! Testing utilities
//!
//! Two tools are provided for tests of the compiler and of code built on it:
//!
//! - [`RecordingFactory`] is a widget factory that builds nothing. It logs every call with
//!   its arguments and can be told to fail on a given element, which makes factory
//!   invocation order and error propagation easy to check.
//! - [`assert_tree`] is a fluent assertion API over a
//!   [`WidgetTree`](crate::ui::toolkit::WidgetTree).
//!
//! ```rust,ignore
//! assert_tree(&tree).root_count(1).root(0, |dialog| {
//!     dialog.element("main_dialog").child(0, |vbox| {
//!         vbox.element("vbox").child(0, |button| {
//!             button.element("push_button").text("Save");
//!         });
//!     });
//! });
//! ```

mod recording;
mod tree_assertions;

pub use recording::{FactoryCall, Handle, RecordingError, RecordingFactory};
pub use tree_assertions::{assert_tree, TreeAssertion, WidgetAssertion};
