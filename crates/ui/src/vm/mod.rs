mod notice_vm;
mod quiz_vm;
mod stage_vm;
mod time_fmt;

pub use notice_vm::{
    NoticeContent, NoticeStack, NoticeTone, NoticeVm, notice_for_error, notice_for_event,
};
pub use quiz_vm::{
    CompletionVm, OptionTone, OptionVm, QuestionVm, QuizHeaderVm, map_completion, map_header,
    map_question,
};
pub use stage_vm::{StageTileVm, map_stage_tile};
pub use time_fmt::format_elapsed;
