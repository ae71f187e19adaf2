#![forbid(unsafe_code)]

pub mod announcer;
pub mod quiz;

pub use announcer::{
    Announcer, AnnouncerRef, Phrasebook, RecordingAnnouncer, SilentAnnouncer, Utterance,
};
pub use quiz::{
    AdvanceTicket, DEFAULT_ADVANCE_DELAY, DigitOutcome, Judgment, QuizAction, QuizController,
    QuizEvent, QuizSession, generate_problems, generate_problems_with_rng,
};
