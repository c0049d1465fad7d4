mod script;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use pronun_core::evaluation::pronunciation_evaluator::PronunciationEvaluator;
use pronun_core::pipeline::evaluation_view::EvaluationView;
use pronun_core::pipeline::infrastructure::text_evaluation_view::TextEvaluationView;
use pronun_core::pipeline::pronunciation_check_use_case::PronunciationCheckUseCase;
use pronun_core::shared::lesson::LessonContent;
use pronun_core::shared::settings::Settings;
use pronun_core::speech::domain::recognition::RecognitionResult;
use pronun_core::speech::infrastructure::log_speech_synthesizer::LogSpeechSynthesizer;
use pronun_core::speech::infrastructure::scripted_speech_capture::{
    AttemptQueue, ScriptedSpeechCapture,
};

use script::{ScriptEvent, Then};

/// Word-level pronunciation checks for daily lesson sentences.
#[derive(Parser)]
#[command(name = "pronun")]
struct Cli {
    /// Settings file (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Edit distance still accepted as a correct word.
    #[arg(long, global = true)]
    max_distance: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score one transcript against one lesson sentence.
    Evaluate {
        /// Lesson JSON file.
        lesson: PathBuf,

        /// Sentence number, starting at 1.
        #[arg(long, default_value = "1")]
        index: usize,

        /// Primary transcript from the recognizer.
        #[arg(long)]
        heard: String,

        /// Alternative transcript (repeatable).
        #[arg(long = "alt")]
        alternatives: Vec<String>,

        /// Recognizer confidence (0.0-1.0).
        #[arg(long, default_value = "1.0")]
        confidence: f32,
    },
    /// Replay a scripted practice session and print the study summary.
    Session {
        /// Lesson JSON file.
        lesson: PathBuf,

        /// JSON array of learner actions.
        script: PathBuf,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let settings = resolve_settings(&cli)?;

    match cli.command {
        Command::Evaluate {
            lesson,
            index,
            heard,
            alternatives,
            confidence,
        } => {
            let lesson = LessonContent::load(&lesson)?;
            run_evaluate(&lesson, index, heard, alternatives, confidence, &settings)
        }
        Command::Session { lesson, script } => {
            let lesson = LessonContent::load(&lesson)?;
            let events = script::load(&script)?;
            run_session(lesson, &events, &settings);
            Ok(())
        }
    }
}

fn resolve_settings(cli: &Cli) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };
    if let Some(distance) = cli.max_distance {
        settings.max_edit_distance = distance;
    }
    settings.validate()?;
    log::debug!("Using settings: {settings:?}");
    Ok(settings)
}

fn run_evaluate(
    lesson: &LessonContent,
    index: usize,
    heard: String,
    alternatives: Vec<String>,
    confidence: f32,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let sentences = lesson.sentences();
    let target = sentences.get(index - 1).ok_or_else(|| {
        format!(
            "Sentence index must be between 1 and {}, got {index}",
            sentences.len()
        )
    })?;

    let recognition = RecognitionResult::new(heard, confidence, alternatives);
    let evaluation = PronunciationEvaluator::from_settings(settings).evaluate(target, &recognition)?;

    let mut view = TextEvaluationView::new(io::stdout());
    view.render_sentence(target);
    view.show_evaluation(&evaluation, &target.tip);
    Ok(())
}

fn run_session(lesson: LessonContent, events: &[ScriptEvent], settings: &Settings) {
    let capture = ScriptedSpeechCapture::new([]);
    let attempts = capture.attempts();
    let mut use_case = PronunciationCheckUseCase::new(
        lesson,
        Box::new(capture),
        Box::new(LogSpeechSynthesizer::new()),
        Box::new(TextEvaluationView::new(io::stdout())),
        settings,
    );

    replay(&mut use_case, &attempts, events);

    println!("\n{}", use_case.summary());
}

fn replay(
    use_case: &mut PronunciationCheckUseCase,
    attempts: &AttemptQueue,
    events: &[ScriptEvent],
) {
    for event in events {
        if let Err(e) = apply(use_case, attempts, event) {
            log::warn!("{event:?}: {e}");
        }
    }
}

fn apply(
    use_case: &mut PronunciationCheckUseCase,
    attempts: &AttemptQueue,
    event: &ScriptEvent,
) -> Result<(), Box<dyn std::error::Error>> {
    match event {
        ScriptEvent::Record { .. } => {
            // A refused start must not leave its attempt for the next record.
            attempts.push(event.capture_signal().flatten());
            if let Err(e) = use_case.start_recording() {
                attempts.clear();
                return Err(e.into());
            }
            match event.then() {
                Then::Wait => {
                    use_case.await_result()?;
                }
                Then::Stop => {
                    use_case.stop_recording()?;
                }
                Then::Cancel => {
                    use_case.cancel_recording();
                }
                Then::Hold => {}
            }
        }
        ScriptEvent::Stop => {
            use_case.stop_recording()?;
        }
        ScriptEvent::Cancel => {
            use_case.cancel_recording();
        }
        ScriptEvent::Next => {
            use_case.next_sentence();
        }
        ScriptEvent::Prev => {
            use_case.prev_sentence();
        }
        ScriptEvent::Listen => {
            use_case.listen_model_sentence()?;
        }
        ScriptEvent::Play { segment } => {
            use_case.play_segment(segment)?;
        }
        ScriptEvent::Speed { rate } => use_case.set_speech_rate(*rate)?,
        ScriptEvent::Known { word } => {
            use_case.toggle_known_word(word);
        }
        ScriptEvent::Write { text } => use_case.set_writing(text),
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &cli.config {
        if !path.exists() {
            return Err(format!("Settings file not found: {}", path.display()).into());
        }
    }
    match &cli.command {
        Command::Evaluate {
            lesson,
            index,
            confidence,
            ..
        } => {
            if !lesson.exists() {
                return Err(format!("Lesson file not found: {}", lesson.display()).into());
            }
            if *index == 0 {
                return Err("Sentence index starts at 1".into());
            }
            if !(0.0..=1.0).contains(confidence) {
                return Err(format!(
                    "Confidence must be between 0.0 and 1.0, got {confidence}"
                )
                .into());
            }
        }
        Command::Session { lesson, script } => {
            if !lesson.exists() {
                return Err(format!("Lesson file not found: {}", lesson.display()).into());
            }
            if !script.exists() {
                return Err(format!("Script file not found: {}", script.display()).into());
            }
        }
    }
    Ok(())
}
