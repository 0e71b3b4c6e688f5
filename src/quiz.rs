//! EcoQuiz: ten multiple-choice questions awarding EcoPoints

use chrono::NaiveDateTime;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::model::{Activity, ActivityCategory};

/// EcoPoints per correct answer
pub const ECO_POINTS_PER_QUESTION: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer_index: usize,
    pub explanation: &'static str,
}

pub const QUESTIONS: [QuizQuestion; 10] = [
    QuizQuestion {
        question: "Which of the following is NOT a renewable energy source?",
        options: ["Solar", "Wind", "Natural Gas", "Hydroelectric"],
        correct_answer_index: 2,
        explanation: "Natural gas is a fossil fuel, a non-renewable source of energy. Solar, wind, and hydroelectric power are all renewable.",
    },
    QuizQuestion {
        question: "What does the term 'composting' refer to?",
        options: [
            "Recycling plastics",
            "Reducing water usage",
            "Decomposing organic waste",
            "Creating energy from waste",
        ],
        correct_answer_index: 2,
        explanation: "Composting is the natural process of recycling organic matter, such as leaves and food scraps, into a valuable fertilizer.",
    },
    QuizQuestion {
        question: "Approximately how long does it take for a plastic bottle to decompose?",
        options: ["10 years", "50 years", "100 years", "450 years"],
        correct_answer_index: 3,
        explanation: "It takes around 450 years for a typical plastic bottle to decompose, which is why reducing plastic use and recycling is so important.",
    },
    QuizQuestion {
        question: "Which of these foods has the highest carbon footprint per kilogram?",
        options: ["Lentils", "Chicken", "Beef", "Potatoes"],
        correct_answer_index: 2,
        explanation: "Beef has a significantly higher carbon footprint compared to other foods due to methane emissions from cattle and land use for grazing.",
    },
    QuizQuestion {
        question: "What is 'fast fashion'?",
        options: [
            "A style of clothing",
            "Inexpensive clothing produced rapidly",
            "Custom-made clothing",
            "Athletic wear",
        ],
        correct_answer_index: 1,
        explanation: "Fast fashion refers to the business model of replicating recent catwalk trends and high-fashion designs, mass-producing them at low cost, and bringing them to retail stores quickly.",
    },
    QuizQuestion {
        question: "Which of these actions helps conserve water at home?",
        options: [
            "Taking longer showers",
            "Fixing leaky faucets",
            "Watering the lawn daily",
            "Washing small loads of laundry",
        ],
        correct_answer_index: 1,
        explanation: "A small drip from a leaky faucet can waste gallons of water every day. Fixing it is a simple and effective way to conserve water.",
    },
    QuizQuestion {
        question: "What is the main benefit of using LED light bulbs over incandescent bulbs?",
        options: [
            "They are cheaper to buy",
            "They produce more heat",
            "They use significantly less energy",
            "They come in more colors",
        ],
        correct_answer_index: 2,
        explanation: "LED bulbs are highly energy-efficient, using up to 85% less energy and lasting much longer than traditional incandescent bulbs.",
    },
    QuizQuestion {
        question: "What do the three arrows in the recycling symbol represent?",
        options: [
            "Reduce, Reuse, Recycle",
            "Air, Water, Land",
            "Plastics, Paper, Glass",
            "Past, Present, Future",
        ],
        correct_answer_index: 0,
        explanation: "The three arrows represent the three key principles of sustainability: Reduce the amount of waste you create, Reuse items when possible, and Recycle materials.",
    },
    QuizQuestion {
        question: "What is carbon offsetting?",
        options: [
            "A way to measure your carbon footprint",
            "A tax on carbon emissions",
            "Compensating for your emissions by funding an equivalent CO2 saving elsewhere",
            "Ignoring your carbon emissions",
        ],
        correct_answer_index: 2,
        explanation: "Carbon offsetting is a mechanism to compensate for your carbon footprint by investing in projects that reduce greenhouse gas emissions, such as reforestation or renewable energy.",
    },
    QuizQuestion {
        question: "Which of these is a major cause of deforestation?",
        options: [
            "Building national parks",
            "Sustainable logging",
            "Urban gardening",
            "Clearing land for agriculture",
        ],
        correct_answer_index: 3,
        explanation: "A primary driver of deforestation is clearing forests to make space for crops and livestock grazing, particularly for products like palm oil and beef.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizPhase {
    Start,
    Playing,
    Finished,
}

/// Result of answering the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub selected: usize,
    pub correct: bool,
    pub correct_answer_index: usize,
    pub explanation: &'static str,
}

/// Quiz session state
#[derive(Debug, Clone)]
pub struct Quiz {
    pub phase: QuizPhase,
    /// Indices into `QUESTIONS`, in play order
    order: Vec<usize>,
    pub current: usize,
    pub score: u32,
    pub feedback: Option<AnswerFeedback>,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

impl Quiz {
    pub fn new() -> Self {
        Self {
            phase: QuizPhase::Start,
            order: (0..QUESTIONS.len()).collect(),
            current: 0,
            score: 0,
            feedback: None,
        }
    }

    /// Shuffle the questions and begin a fresh round
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
        self.phase = QuizPhase::Playing;
        self.current = 0;
        self.score = 0;
        self.feedback = None;
    }

    pub fn total_questions(&self) -> usize {
        self.order.len()
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        if self.phase != QuizPhase::Playing {
            return None;
        }
        self.order.get(self.current).map(|&i| &QUESTIONS[i])
    }

    /// Answer the current question. Ignored once feedback is showing.
    pub fn answer(&mut self, index: usize) -> Option<AnswerFeedback> {
        if self.feedback.is_some() {
            return None;
        }
        let question = self.current_question()?;
        let correct = index == question.correct_answer_index;
        if correct {
            self.score += 1;
        }
        let feedback = AnswerFeedback {
            selected: index,
            correct,
            correct_answer_index: question.correct_answer_index,
            explanation: question.explanation,
        };
        self.feedback = Some(feedback);
        Some(feedback)
    }

    /// Move to the next question, or finish after the last one. Finishing
    /// with a non-zero score yields the reward activity.
    pub fn next(&mut self, id: u64, now: NaiveDateTime) -> Option<Activity> {
        if self.phase != QuizPhase::Playing || self.feedback.is_none() {
            return None;
        }
        if self.current + 1 < self.order.len() {
            self.current += 1;
            self.feedback = None;
            None
        } else {
            self.finish(id, now)
        }
    }

    fn finish(&mut self, id: u64, now: NaiveDateTime) -> Option<Activity> {
        self.phase = QuizPhase::Finished;
        self.feedback = None;
        let points = self.score * ECO_POINTS_PER_QUESTION;
        log::info!("Quiz finished: {}/{}", self.score, self.order.len());
        (points > 0).then(|| Activity {
            id,
            category: ActivityCategory::GoodsServices,
            description: format!("EcoQuiz: Scored {}/{}!", self.score, self.order.len()),
            co2e: 0.0,
            date: now,
            eco_points: points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn play(quiz: &mut Quiz, answer_correctly: impl Fn(usize) -> bool) -> Option<Activity> {
        let mut reward = None;
        let mut n = 0;
        while quiz.phase == QuizPhase::Playing {
            let q = quiz.current_question().unwrap();
            let pick = if answer_correctly(n) {
                q.correct_answer_index
            } else {
                (q.correct_answer_index + 1) % 4
            };
            quiz.answer(pick).unwrap();
            reward = quiz.next(99, now());
            n += 1;
        }
        reward
    }

    #[test]
    fn test_every_question_is_well_formed() {
        for q in &QUESTIONS {
            assert!(q.correct_answer_index < q.options.len());
        }
    }

    #[test]
    fn test_perfect_round_awards_points() {
        let mut quiz = Quiz::new();
        quiz.start(&mut Pcg32::seed_from_u64(1));
        let reward = play(&mut quiz, |_| true).unwrap();
        assert_eq!(quiz.phase, QuizPhase::Finished);
        assert_eq!(reward.description, "EcoQuiz: Scored 10/10!");
        assert_eq!(reward.eco_points, 100);
        assert_eq!(reward.co2e, 0.0);
        assert_eq!(reward.category, ActivityCategory::GoodsServices);
    }

    #[test]
    fn test_zero_score_gives_no_activity() {
        let mut quiz = Quiz::new();
        quiz.start(&mut Pcg32::seed_from_u64(2));
        assert!(play(&mut quiz, |_| false).is_none());
        assert_eq!(quiz.phase, QuizPhase::Finished);
    }

    #[test]
    fn test_second_answer_is_ignored() {
        let mut quiz = Quiz::new();
        quiz.start(&mut Pcg32::seed_from_u64(3));
        let q = quiz.current_question().unwrap();
        let wrong = (q.correct_answer_index + 1) % 4;
        assert!(!quiz.answer(wrong).unwrap().correct);
        assert!(quiz.answer(q.correct_answer_index).is_none());
        assert_eq!(quiz.score, 0);
    }

    #[test]
    fn test_cannot_advance_without_answering() {
        let mut quiz = Quiz::new();
        quiz.start(&mut Pcg32::seed_from_u64(4));
        assert!(quiz.next(1, now()).is_none());
        assert_eq!(quiz.current, 0);
    }

    #[test]
    fn test_shuffle_keeps_all_questions() {
        let mut quiz = Quiz::new();
        quiz.start(&mut Pcg32::seed_from_u64(5));
        let mut order = quiz.order.clone();
        order.sort_unstable();
        assert_eq!(order, (0..QUESTIONS.len()).collect::<Vec<_>>());
    }
}
