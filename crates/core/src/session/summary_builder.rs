use super::session_state::SessionState;
use crate::shared::lesson::LessonContent;

const FOLLOW_UP_REQUEST: &str = "---\n\
Based on the above, please help me with:\n\
1. How to use the words I checked (with example sentences)\n\
2. Advice on the parts I got wrong in the pronunciation check\n\
3. Corrections for my Today's Writing\n\
4. More expressions that build on today's phrases";

/// Plain-text study report for pasting into a chat tutor.
///
/// Every pronunciation sentence is listed in index order whether or not it
/// was attempted.
pub fn build_summary(lesson: &LessonContent, state: &SessionState) -> String {
    let mut s = format!("[Day {}: {} Study Summary]\n\n", lesson.day, lesson.sweet);

    let known = known_words_in_page_order(lesson, state);
    s.push_str(&format!("■ Words checked ({}):\n", known.len()));
    if known.is_empty() {
        s.push_str("none\n\n");
    } else {
        s.push_str(&format!("{}\n\n", known.join(", ")));
    }

    s.push_str("■ Listening replays:\n");
    if state.replay_counts().is_empty() {
        s.push_str("not played\n\n");
    } else {
        let plays: Vec<String> = state
            .replay_counts()
            .iter()
            .map(|(segment, count)| format!("{segment}: {count} {}", plural(*count, "play")))
            .collect();
        s.push_str(&format!("{}\n\n", plays.join(", ")));
    }

    s.push_str("■ Pronunciation check:\n");
    for (index, sentence) in lesson.sentences().iter().enumerate() {
        match state.outcome(index) {
            Some(outcome) => {
                s.push_str(&format!(
                    "  {}. \"{}\" → {}% (heard: \"{}\")\n",
                    index + 1,
                    outcome.target_text,
                    outcome.score,
                    outcome.heard_text
                ));
                if !outcome.wrong_words.is_empty() {
                    s.push_str(&format!("     missed: {}\n", outcome.wrong_words.join(", ")));
                }
            }
            None => {
                s.push_str(&format!(
                    "  {}. \"{}\" → not attempted\n",
                    index + 1,
                    sentence.text
                ));
            }
        }
    }
    s.push('\n');

    s.push_str("■ Today's Writing:\n");
    let writing = state.writing().trim();
    if writing.is_empty() {
        s.push_str("(not written)\n\n");
    } else {
        s.push_str(&format!("{writing}\n\n"));
    }

    s.push_str(FOLLOW_UP_REQUEST);
    s
}

fn known_words_in_page_order(lesson: &LessonContent, state: &SessionState) -> Vec<String> {
    let mut words: Vec<String> = lesson
        .vocabulary()
        .filter(|v| state.is_known(&v.en))
        .map(|v| v.en.clone())
        .collect();
    for word in state.known_words() {
        if !words.contains(word) {
            words.push(word.clone());
        }
    }
    words
}

fn plural(count: u32, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::pronunciation_evaluator::EvaluationOutcome;
    use crate::shared::lesson::fixtures;

    fn outcome(lesson: &LessonContent, index: usize, score: u8, wrong: &[&str]) -> EvaluationOutcome {
        EvaluationOutcome {
            score,
            heard_text: format!("attempt {index}"),
            target_text: lesson.sentences()[index].text.clone(),
            wrong_words: wrong.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_session_marks_everything_unattempted() {
        let lesson = fixtures::lesson();
        let summary = build_summary(&lesson, &SessionState::new());
        assert!(summary.starts_with("[Day 1: Scones Study Summary]"));
        assert!(summary.contains("■ Words checked (0):\nnone"));
        assert!(summary.contains("■ Listening replays:\nnot played"));
        assert!(summary.contains("(not written)"));
        assert_eq!(summary.matches("→ not attempted").count(), 5);
        assert!(summary.ends_with(FOLLOW_UP_REQUEST));
    }

    #[test]
    fn test_outcomes_listed_in_index_order_regardless_of_attempt_order() {
        let lesson = fixtures::lesson();
        let mut state = SessionState::new();
        state.record_outcome(3, outcome(&lesson, 3, 60, &["gently"]));
        state.record_outcome(0, outcome(&lesson, 0, 100, &[]));

        let summary = build_summary(&lesson, &state);
        let lines: Vec<&str> = summary
            .lines()
            .filter(|l| l.starts_with("  ") && l.contains('→'))
            .collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "  1. \"Could I get a scone, please?\" → 100% (heard: \"attempt 0\")"
        );
        assert!(lines[1].starts_with("  2. ") && lines[1].ends_with("not attempted"));
        assert!(lines[2].ends_with("not attempted"));
        assert_eq!(
            lines[3],
            "  4. \"Add the flour and mix gently.\" → 60% (heard: \"attempt 3\")"
        );
        assert!(lines[4].starts_with("  5. ") && lines[4].ends_with("not attempted"));
        assert!(summary.contains("     missed: gently\n"));
    }

    #[test]
    fn test_known_words_follow_page_order() {
        let lesson = fixtures::lesson();
        let mut state = SessionState::new();
        state.toggle_known_word("takeaway");
        state.toggle_known_word("flour");
        state.toggle_known_word("oven mitt");
        let summary = build_summary(&lesson, &state);
        assert!(summary.contains("■ Words checked (3):\nflour, takeaway, oven mitt\n"));
    }

    #[test]
    fn test_replays_and_writing() {
        let lesson = fixtures::lesson();
        let mut state = SessionState::new();
        state.record_replay("listening-a");
        state.record_replay("listening-a");
        state.record_replay("recipe");
        state.set_writing("  I tried a scone with jam.  ");
        let summary = build_summary(&lesson, &state);
        assert!(summary.contains("listening-a: 2 plays, recipe: 1 play\n"));
        assert!(summary.contains("■ Today's Writing:\nI tried a scone with jam.\n"));
    }
}
