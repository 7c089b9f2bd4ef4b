//! Built-in questionnaire content and integrity checks.
//!
//! The instruments here are standard published screeners; the text is fixed
//! content, not configuration. `validate` guards the invariants scoring relies
//! on, in particular that the interpretation bands partition `[0, max_score]`.

use serde::Serialize;

use super::domain::{AnswerOption, InterpretationBand, Question, Questionnaire, ScoringGuide};

/// Content defects that make a questionnaire unscoreable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("questionnaire '{slug}' has no questions")]
    NoQuestions { slug: String },
    #[error("questionnaire '{slug}' repeats question id {id}")]
    DuplicateQuestion { slug: String, id: u32 },
    #[error("question {id} of '{slug}' has no options")]
    NoOptions { slug: String, id: u32 },
    #[error("questionnaire '{slug}' declares max score {declared} but options sum to {actual}")]
    MaxScoreMismatch {
        slug: String,
        declared: u32,
        actual: u32,
    },
    #[error("questionnaire '{slug}' has no interpretation bands")]
    NoBands { slug: String },
    #[error("interpretation bands of '{slug}' break at score {score}: expected a band starting there")]
    BandGap { slug: String, score: u32 },
    #[error("interpretation band {min}-{max} of '{slug}' is inverted")]
    InvertedBand { slug: String, min: u32, max: u32 },
    #[error("interpretation bands of '{slug}' stop at {last} instead of max score {max_score}")]
    BandShortfall {
        slug: String,
        last: u32,
        max_score: u32,
    },
    #[error("duplicate questionnaire slug '{slug}'")]
    DuplicateSlug { slug: String },
}

impl Questionnaire {
    /// Check structural invariants: unique question ids, non-empty option
    /// lists, a consistent declared max score, and a band table that covers
    /// `[0, max_score]` exactly once.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::NoQuestions {
                slug: self.slug.clone(),
            });
        }

        let mut seen = std::collections::BTreeSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestion {
                    slug: self.slug.clone(),
                    id: question.id,
                });
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions {
                    slug: self.slug.clone(),
                    id: question.id,
                });
            }
        }

        let actual: u32 = self.questions.iter().map(Question::max_value).sum();
        if actual != self.scoring.max_score {
            return Err(CatalogError::MaxScoreMismatch {
                slug: self.slug.clone(),
                declared: self.scoring.max_score,
                actual,
            });
        }

        if self.interpretations.is_empty() {
            return Err(CatalogError::NoBands {
                slug: self.slug.clone(),
            });
        }

        let mut expected = 0u32;
        for band in &self.interpretations {
            if band.max < band.min {
                return Err(CatalogError::InvertedBand {
                    slug: self.slug.clone(),
                    min: band.min,
                    max: band.max,
                });
            }
            if band.min != expected {
                return Err(CatalogError::BandGap {
                    slug: self.slug.clone(),
                    score: expected,
                });
            }
            expected = band.max + 1;
        }
        if expected != self.scoring.max_score + 1 {
            return Err(CatalogError::BandShortfall {
                slug: self.slug.clone(),
                last: expected - 1,
                max_score: self.scoring.max_score,
            });
        }

        Ok(())
    }
}

/// Immutable set of questionnaires served by the platform.
#[derive(Debug, Clone)]
pub struct AssessmentCatalog {
    questionnaires: Vec<Questionnaire>,
}

/// Listing view returned by the catalog index endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionnaireSummary {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub question_count: usize,
    pub max_score: u32,
}

impl AssessmentCatalog {
    /// The standard instrument set: PHQ-9, GAD-7, PCL-5, MDQ, and PSS-10.
    pub fn standard() -> Self {
        Self {
            questionnaires: vec![phq9(), gad7(), pcl5(), mdq(), pss10()],
        }
    }

    pub fn get(&self, slug: &str) -> Option<&Questionnaire> {
        self.questionnaires
            .iter()
            .find(|questionnaire| questionnaire.slug == slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Questionnaire> {
        self.questionnaires.iter()
    }

    pub fn summaries(&self) -> Vec<QuestionnaireSummary> {
        self.questionnaires
            .iter()
            .map(|questionnaire| QuestionnaireSummary {
                slug: questionnaire.slug.clone(),
                name: questionnaire.name.clone(),
                description: questionnaire.description.clone(),
                question_count: questionnaire.questions.len(),
                max_score: questionnaire.scoring.max_score,
            })
            .collect()
    }

    /// Validate every questionnaire and reject duplicate slugs. Run at
    /// startup so authoring defects fail the boot instead of a request.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut slugs = std::collections::BTreeSet::new();
        for questionnaire in &self.questionnaires {
            if !slugs.insert(questionnaire.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug {
                    slug: questionnaire.slug.clone(),
                });
            }
            questionnaire.validate()?;
        }
        Ok(())
    }
}

fn option(value: u32, label: &str) -> AnswerOption {
    AnswerOption {
        value,
        label: label.to_string(),
    }
}

fn question(id: u32, text: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        id,
        text: text.to_string(),
        options,
    }
}

fn band(
    min: u32,
    max: u32,
    severity: &str,
    description: &str,
    recommendation: &str,
) -> InterpretationBand {
    InterpretationBand {
        min,
        max,
        severity: severity.to_string(),
        description: description.to_string(),
        recommendation: recommendation.to_string(),
    }
}

/// "Not at all" .. "Nearly every day", 0-3.
fn frequency_options() -> Vec<AnswerOption> {
    vec![
        option(0, "Not at all"),
        option(1, "Several days"),
        option(2, "More than half the days"),
        option(3, "Nearly every day"),
    ]
}

/// "Not at all" .. "Extremely", 0-4.
fn intensity_options() -> Vec<AnswerOption> {
    vec![
        option(0, "Not at all"),
        option(1, "A little bit"),
        option(2, "Moderately"),
        option(3, "Quite a bit"),
        option(4, "Extremely"),
    ]
}

fn yes_no_options() -> Vec<AnswerOption> {
    vec![option(1, "Yes"), option(0, "No")]
}

/// PSS frequency scale; `reversed` flips the values for positively worded items.
fn stress_options(reversed: bool) -> Vec<AnswerOption> {
    let labels = ["Never", "Almost Never", "Sometimes", "Fairly Often", "Very Often"];
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let value = if reversed { 4 - index as u32 } else { index as u32 };
            option(value, label)
        })
        .collect()
}

fn phq9() -> Questionnaire {
    let items = [
        "Little interest or pleasure in doing things",
        "Feeling down, depressed, or hopeless",
        "Trouble falling or staying asleep, or sleeping too much",
        "Feeling tired or having little energy",
        "Poor appetite or overeating",
        "Feeling bad about yourself - or that you are a failure or have let yourself or your family down",
        "Trouble concentrating on things, such as reading the newspaper or watching television",
        "Moving or speaking so slowly that other people could have noticed. Or the opposite - being so fidgety or restless that you have been moving around a lot more than usual",
        "Thoughts that you would be better off dead, or of hurting yourself",
    ];

    Questionnaire {
        slug: "phq-9".to_string(),
        name: "PHQ-9 (Patient Health Questionnaire)".to_string(),
        description: "The PHQ-9 is a validated 9-item depression screening tool that scores each of the 9 DSM-5 criteria for depression.".to_string(),
        questions: items
            .iter()
            .enumerate()
            .map(|(index, text)| question(index as u32 + 1, text, frequency_options()))
            .collect(),
        scoring: ScoringGuide {
            max_score: 27,
            method: "Sum all responses (0-3 for each question)".to_string(),
            note: None,
        },
        interpretations: vec![
            band(0, 4, "Minimal", "Minimal or no depression", "No treatment necessary. Continue healthy habits."),
            band(5, 9, "Mild", "Mild depression", "Watchful waiting. Consider self-help strategies, exercise, and therapy."),
            band(10, 14, "Moderate", "Moderate depression", "Treatment plan warranted. Consider therapy and/or medication."),
            band(15, 19, "Moderately Severe", "Moderately severe depression", "Active treatment with therapy and medication recommended."),
            band(20, 27, "Severe", "Severe depression", "Immediate treatment required. Contact mental health professional today. If suicidal, call 988."),
        ],
    }
}

fn gad7() -> Questionnaire {
    let items = [
        "Feeling nervous, anxious, or on edge",
        "Not being able to stop or control worrying",
        "Worrying too much about different things",
        "Trouble relaxing",
        "Being so restless that it's hard to sit still",
        "Becoming easily annoyed or irritable",
        "Feeling afraid as if something awful might happen",
    ];

    Questionnaire {
        slug: "gad-7".to_string(),
        name: "GAD-7 (Generalized Anxiety Disorder)".to_string(),
        description: "The GAD-7 is a validated 7-item anxiety screening tool widely used in clinical practice.".to_string(),
        questions: items
            .iter()
            .enumerate()
            .map(|(index, text)| question(index as u32 + 1, text, frequency_options()))
            .collect(),
        scoring: ScoringGuide {
            max_score: 21,
            method: "Sum all responses (0-3 for each question)".to_string(),
            note: None,
        },
        interpretations: vec![
            band(0, 4, "Minimal", "Minimal anxiety", "No treatment necessary."),
            band(5, 9, "Mild", "Mild anxiety", "Consider self-help strategies and monitoring."),
            band(10, 14, "Moderate", "Moderate anxiety", "Consider therapy (CBT recommended)."),
            band(15, 21, "Severe", "Severe anxiety", "Active treatment warranted. Therapy and possibly medication. Contact provider."),
        ],
    }
}

fn pcl5() -> Questionnaire {
    let items = [
        "Repeated, disturbing, and unwanted memories of the stressful experience?",
        "Repeated, disturbing dreams of the stressful experience?",
        "Suddenly feeling or acting as if the stressful experience were actually happening again?",
        "Feeling very upset when something reminded you of the stressful experience?",
        "Having strong physical reactions when something reminded you of the stressful experience?",
        "Avoiding memories, thoughts, or feelings related to the stressful experience?",
        "Avoiding external reminders of the stressful experience?",
        "Trouble remembering important parts of the stressful experience?",
        "Having strong negative beliefs about yourself, other people, or the world?",
        "Blaming yourself or someone else for the stressful experience?",
        "Having strong negative feelings such as fear, horror, anger, guilt, or shame?",
        "Loss of interest in activities that you used to enjoy?",
        "Feeling distant or cut off from other people?",
        "Trouble experiencing positive feelings?",
        "Irritable behavior, angry outbursts, or acting aggressively?",
        "Taking too many risks or doing things that could cause you harm?",
        "Being \"superalert\" or watchful or on guard?",
        "Feeling jumpy or easily startled?",
        "Having difficulty concentrating?",
        "Trouble falling or staying asleep?",
    ];

    Questionnaire {
        slug: "pcl-5".to_string(),
        name: "PCL-5 (PTSD Checklist for DSM-5)".to_string(),
        description: "A 20-item self-report measure that assesses the 20 DSM-5 symptoms of PTSD. Widely used in clinical practice and research.".to_string(),
        questions: items
            .iter()
            .enumerate()
            .map(|(index, text)| question(index as u32 + 1, text, intensity_options()))
            .collect(),
        scoring: ScoringGuide {
            max_score: 80,
            method: "Sum all responses (0-4 for each question).".to_string(),
            note: Some("Score >=33 suggests probable PTSD. Screening only, not diagnosis.".to_string()),
        },
        interpretations: vec![
            band(0, 32, "Below Cutoff", "Symptoms below PTSD threshold", "Monitor symptoms. Practice stress management. If traumatized recently, consider preventive counseling."),
            band(33, 80, "Above Cutoff", "Possible PTSD", "IMPORTANT: Seek professional evaluation from trauma specialist. Call 988 if in crisis. PTSD is treatable."),
        ],
    }
}

fn mdq() -> Questionnaire {
    let items = [
        "Has there been a period when you felt so good or hyper that others thought you were not your normal self?",
        "You were so irritable that you shouted at people or started fights?",
        "You felt much more self-confident than usual?",
        "You got much less sleep than usual and found you didn't really miss it?",
        "You were much more talkative or spoke much faster than usual?",
        "Thoughts raced through your head?",
        "You were so easily distracted?",
        "You had much more energy than usual?",
        "You were much more active or did many more things than usual?",
        "You were much more social or outgoing than usual?",
        "You were much more interested in sex than usual?",
        "You did things that were risky or foolish?",
        "Spending money got you into trouble?",
    ];

    Questionnaire {
        slug: "mdq".to_string(),
        name: "MDQ (Mood Disorder Questionnaire)".to_string(),
        description: "A screening tool for bipolar disorder that assesses history of manic or hypomanic symptoms.".to_string(),
        questions: items
            .iter()
            .enumerate()
            .map(|(index, text)| question(index as u32 + 1, text, yes_no_options()))
            .collect(),
        scoring: ScoringGuide {
            max_score: 13,
            method: "Count \"Yes\" responses. Positive screen: 7+ \"Yes\" AND occurred at same time AND caused problems.".to_string(),
            note: Some("Screening only. Professional evaluation required for diagnosis.".to_string()),
        },
        interpretations: vec![
            band(0, 6, "Negative Screen", "Below screening threshold", "If you have mood concerns, discuss with provider."),
            band(7, 13, "Positive Screen", "Possible bipolar disorder", "URGENT: Schedule psychiatrist evaluation. Bipolar requires professional treatment. Call 988 if in crisis."),
        ],
    }
}

fn pss10() -> Questionnaire {
    // Items 4, 5, 7, and 8 are positively worded; reverse scoring is baked
    // into their option values.
    let items = [
        ("In the last month, how often have you been upset because of something unexpected?", false),
        ("In the last month, how often have you felt unable to control important things?", false),
        ("In the last month, how often have you felt nervous and stressed?", false),
        ("In the last month, how often have you felt confident about handling problems?", true),
        ("In the last month, how often have you felt things were going your way?", true),
        ("In the last month, how often have you found you could not cope with things?", false),
        ("In the last month, how often have you been able to control irritations?", true),
        ("In the last month, how often have you felt on top of things?", true),
        ("In the last month, how often have you been angered by things outside your control?", false),
        ("In the last month, how often have you felt difficulties were piling up?", false),
    ];

    Questionnaire {
        slug: "pss-10".to_string(),
        name: "PSS-10 (Perceived Stress Scale)".to_string(),
        description: "The most widely used psychological instrument for measuring perception of stress.".to_string(),
        questions: items
            .iter()
            .enumerate()
            .map(|(index, (text, reversed))| {
                question(index as u32 + 1, text, stress_options(*reversed))
            })
            .collect(),
        scoring: ScoringGuide {
            max_score: 40,
            method: "Sum all responses (reverse scoring already applied in options).".to_string(),
            note: None,
        },
        interpretations: vec![
            band(0, 13, "Low Stress", "Low perceived stress", "Maintain healthy coping strategies and self-care."),
            band(14, 26, "Moderate Stress", "Moderate perceived stress", "Consider stress management: exercise, meditation, time management, social support."),
            band(27, 40, "High Stress", "High perceived stress", "Important to address actively. Consider professional support. Practice stress reduction daily."),
        ],
    }
}
