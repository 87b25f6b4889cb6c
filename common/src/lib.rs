pub mod error;

#[cfg(not(feature = "arc"))]
pub type Rc<T> = std::rc::Rc<T>;

#[cfg(feature = "arc")]
pub type Rc<T> = std::sync::Arc<T>;
