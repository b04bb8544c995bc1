mod quiz_vm;

pub use quiz_vm::{
    OptionVm, QuestionVm, QuizIntent, QuizScreen, StartVm, SummaryVm, map_quiz_screen,
    option_index_for_key,
};
