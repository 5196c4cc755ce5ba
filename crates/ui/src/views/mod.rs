mod notices;
mod quiz;
mod stages;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use notices::NoticeHost;
pub(crate) use notices::push_notice;
pub use quiz::QuizView;
pub use stages::StagesView;
