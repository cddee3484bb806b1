use serde::{Deserialize, Serialize};

pub mod writer;

pub use writer::{persist, write_csv, write_jsonl};

pub const JSONL_FILE: &str = "english_training_data.jsonl";
pub const CSV_FILE: &str = "english_training_data.csv";

/// One prompt/answer pair of the tutoring corpus.
///
/// Field order is the serialized key order (`input`, then `output`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: String,
    pub output: String,
}

impl TrainingExample {
    fn new(input: &str, output: &str) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Grammar,
    Pronunciation,
    Vocabulary,
}

impl Topic {
    /// Emission order of the corpus.
    pub const ALL: [Topic; 3] = [Topic::Grammar, Topic::Pronunciation, Topic::Vocabulary];
}

const GRAMMAR: &[(&str, &str)] = &[
    (
        "Explain present simple tense",
        "The Present Simple tense is used for:\n\n1. Habits and routines: \"I work every day.\"\n2. General truths: \"The sun rises in the east.\"\n3. Permanent situations: \"She lives in London.\"\n\nStructure:\n- I/You/We/They: base verb (work)\n- He/She/It: base verb + s (works)\n\nTime expressions: always, usually, often, every day, never",
    ),
    (
        "What's the difference between present simple and present continuous?",
        "Present Simple vs Present Continuous:\n\n📚 PRESENT SIMPLE:\n- Habits & routines: \"I work every day.\"\n- General truths: \"Water boils at 100°C.\"\n- Permanent situations: \"He lives in Paris.\"\n\n🎯 PRESENT CONTINUOUS:\n- Actions happening now: \"I'm studying English.\"\n- Temporary situations: \"She's staying at a hotel.\"\n- Future arrangements: \"We're meeting tomorrow.\"\n\nKey difference: Permanent vs Temporary, Habit vs Current Action",
    ),
];

const PRONUNCIATION: &[(&str, &str)] = &[
    (
        "How to pronounce 'water'?",
        "🎯 Pronunciation: \"water\"\n\n📝 Phonetic: /ˈwɔːtər/ (US) or /ˈwɒtə/ (UK)\n💡 Key Tips:\n- American: \"wader\" (flap T sounds like D)\n- British: \"waw-tuh\" (clear T sound)\n- Stress on first syllable: WA-ter\n\n🎤 Practice:\n- \"Can I have some water, please?\"\n- \"The water is very cold.\"\n- \"I drink water every day.\"",
    ),
    (
        "Help with TH sound",
        "🔊 Mastering the TH Sound\n\nTwo types of TH sounds:\n\n1. Voiceless TH (/θ/):\n- \"think\", \"thank\", \"three\", \"birthday\"\n- Tongue between teeth, no vocal vibration\n\n2. Voiced TH (/ð/):\n- \"this\", \"that\", \"mother\", \"brother\"\n- Tongue between teeth, with vocal vibration\n\n🎯 Practice Exercises:\n- \"Three thin thinkers thinking thoroughly\"\n- \"This is better than that\"\n- \"Their mother's birthday is on Thursday\"",
    ),
];

const VOCABULARY: &[(&str, &str)] = &[(
    "Business English vocabulary",
    "💼 Essential Business English Vocabulary:\n\n📊 Meetings:\n- Agenda: meeting plan\n- Minutes: written record\n- Action items: tasks to complete\n- Deadline: due date\n\n📈 Performance:\n- KPI: Key Performance Indicator\n- ROI: Return on Investment\n- Benchmark: standard for comparison\n- Target: goal to achieve\n\n💬 Useful Phrases:\n- \"Let's circle back to that\"\n- \"I'll follow up on that\"\n- \"What's the timeline?\"\n- \"Let's touch base tomorrow\"",
)];

fn group(topic: Topic) -> &'static [(&'static str, &'static str)] {
    match topic {
        Topic::Grammar => GRAMMAR,
        Topic::Pronunciation => PRONUNCIATION,
        Topic::Vocabulary => VOCABULARY,
    }
}

pub fn examples_for(topic: Topic) -> Vec<TrainingExample> {
    group(topic)
        .iter()
        .map(|(input, output)| TrainingExample::new(input, output))
        .collect()
}

/// The full corpus: grammar, then pronunciation, then vocabulary.
pub fn generate_examples() -> Vec<TrainingExample> {
    Topic::ALL.iter().copied().flat_map(examples_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_has_fixed_length() {
        let total: usize = Topic::ALL.iter().map(|t| group(*t).len()).sum();
        assert_eq!(total, 5);
        assert_eq!(generate_examples().len(), total);
    }

    #[test]
    fn corpus_is_deterministic() {
        assert_eq!(generate_examples(), generate_examples());
    }

    #[test]
    fn every_example_has_text() {
        for example in generate_examples() {
            assert!(!example.input.trim().is_empty());
            assert!(!example.output.trim().is_empty());
        }
    }

    #[test]
    fn groups_are_concatenated_in_topic_order() {
        let examples = generate_examples();
        let inputs: Vec<&str> = examples.iter().map(|e| e.input.as_str()).collect();
        assert_eq!(
            inputs,
            vec![
                "Explain present simple tense",
                "What's the difference between present simple and present continuous?",
                "How to pronounce 'water'?",
                "Help with TH sound",
                "Business English vocabulary",
            ]
        );
        assert_eq!(examples_for(Topic::Vocabulary).len(), 1);
    }
}
