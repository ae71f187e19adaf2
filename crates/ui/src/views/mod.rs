mod quiz;

pub use quiz::QuizRoot;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
