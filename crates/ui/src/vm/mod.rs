mod quiz_vm;

pub use quiz_vm::{
    FeedbackVm, OrderChoiceVm, ProblemVm, QuizVm, ResultVm, SetupVm, TableChoiceVm, map_quiz_vm,
};
