mod drill;
mod result;
mod root;
mod setup;

pub use root::QuizRoot;

#[cfg(test)]
pub(crate) use root::QuizTestHandles;
