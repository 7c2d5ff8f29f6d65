//! The solving backend's math-solution payload.
//!
//! The backend answers with JSON whose prose fields interleave text and
//! LaTeX.  This module models that payload, picks the consensus answer across
//! solution paths, and formats the whole document as HTML
//! (see [`format_solution`]).

mod html;
mod viewport;

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::html::format_solution;
pub use self::viewport::Viewport;

/// Failure to read a solution payload.
#[derive(Debug, Error)]
pub enum Error {
    /// The payload is not valid JSON, or does not match the schema.
    #[error("invalid solution payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// A complete solution to one SAT math problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathSolution {
    pub sat_meta: SatMeta,
    pub summary: Summary,
    pub answer_spec: AnswerSpec,
    pub solution_paths: Vec<SolutionPath>,
    #[serde(default)]
    pub recommended_path_id: Option<String>,
    #[serde(default)]
    pub localization: Option<ProblemLocalization>,
}

impl MathSolution {
    /// Parse a backend payload.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The path the backend recommends, if it names one that exists.
    pub fn recommended_path(&self) -> Option<&SolutionPath> {
        let id = self.recommended_path_id.as_deref()?;
        self.solution_paths.iter().find(|p| p.path_id == id)
    }

    /// Whether `path` is the recommended one.
    pub fn is_recommended(&self, path: &SolutionPath) -> bool {
        self.recommended_path_id.as_deref() == Some(path.path_id.as_str())
    }
}

/// Pick the answer most solution paths agree on.
///
/// Answers are compared after trimming; empty ones are ignored.  A tie goes
/// to the answer that appeared first.  When no path has an answer, the
/// recommended path's answer is used.
pub fn aggregate_answer(solution: &MathSolution) -> Option<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (order, answer) in solution
        .solution_paths
        .iter()
        .map(|p| p.conclusion.final_answer.trim())
        .filter(|a| !a.is_empty())
        .enumerate()
    {
        counts.entry(answer).or_insert((0, order)).0 += 1;
    }

    let best = counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(answer, _)| answer.to_string());

    best.or_else(|| {
        solution
            .recommended_path()
            .map(|p| p.conclusion.final_answer.trim())
            .filter(|a| !a.is_empty())
            .map(str::to_string)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    GridIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorPolicy {
    NoCalculator,
    Calculator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillDomain {
    Algebra,
    #[serde(rename = "Advanced Math")]
    AdvancedMath,
    #[serde(rename = "Problem Solving & Data Analysis")]
    ProblemSolvingAndDataAnalysis,
    #[serde(rename = "Geometry & Trigonometry")]
    GeometryAndTrigonometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnowledgeCategory {
    Algebra,
    #[serde(rename = "Advanced Math")]
    AdvancedMath,
    #[serde(rename = "Problem Solving & Data Analysis")]
    ProblemSolvingAndDataAnalysis,
    #[serde(rename = "Geometry & Trigonometry")]
    GeometryAndTrigonometry,
    Foundations,
    #[serde(rename = "Test Strategy")]
    TestStrategy,
}

impl KnowledgeCategory {
    pub fn label(self) -> &'static str {
        match self {
            KnowledgeCategory::Algebra => "Algebra",
            KnowledgeCategory::AdvancedMath => "Advanced Math",
            KnowledgeCategory::ProblemSolvingAndDataAnalysis => "Problem Solving & Data Analysis",
            KnowledgeCategory::GeometryAndTrigonometry => "Geometry & Trigonometry",
            KnowledgeCategory::Foundations => "Foundations",
            KnowledgeCategory::TestStrategy => "Test Strategy",
        }
    }
}

impl SkillDomain {
    pub fn label(self) -> &'static str {
        match self {
            SkillDomain::Algebra => "Algebra",
            SkillDomain::AdvancedMath => "Advanced Math",
            SkillDomain::ProblemSolvingAndDataAnalysis => "Problem Solving & Data Analysis",
            SkillDomain::GeometryAndTrigonometry => "Geometry & Trigonometry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyBand {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatMeta {
    pub question_type: QuestionType,
    pub calculator_policy: CalculatorPolicy,
    pub skill_domain: SkillDomain,
    /// Specific topic within the domain, e.g. "Linear equations".
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub difficulty_band: Option<DifficultyBand>,
    #[serde(default)]
    pub time_target_seconds: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeItem {
    pub topic: String,
    pub category: KnowledgeCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerFormat {
    Integer,
    Fraction,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    None,
    NearestTenth,
    NearestHundredth,
}

/// How the answer must be given: a choice for multiple choice, a format for
/// grid-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSpec {
    #[serde(default)]
    pub choices: Option<Vec<String>>,
    #[serde(default)]
    pub correct_choice: Option<Choice>,
    #[serde(default)]
    pub answer_format: Option<AnswerFormat>,
    #[serde(default)]
    pub rounding: Option<Rounding>,
    #[serde(default)]
    pub max_chars: Option<u32>,
    #[serde(default)]
    pub units: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabNote {
    pub term_en: String,
    pub term_vi: String,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    pub definition_vi: String,
    #[serde(default, alias = "academic_register")]
    pub register: Option<String>,
    #[serde(default)]
    pub example_en: Option<String>,
    #[serde(default)]
    pub note_vi: Option<String>,
}

/// A simplified restatement of the problem plus notes on its vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemLocalization {
    pub simplified_vi: String,
    pub vocab_notes: Vec<VocabNote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub givens: Vec<String>,
    #[serde(default)]
    pub constraints: Option<Vec<String>>,
    pub goal: String,
    pub required_knowledge: Vec<KnowledgeItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planning {
    pub strategy: String,
    pub reasoning_flow: Vec<String>,
    #[serde(default)]
    pub sat_tips: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesmosPurpose {
    Visualize,
    SolveEquation,
    CountIntersections,
    EliminateChoices,
    VerifySolution,
}

impl DesmosPurpose {
    pub fn as_str(self) -> &'static str {
        match self {
            DesmosPurpose::Visualize => "visualize",
            DesmosPurpose::SolveEquation => "solve_equation",
            DesmosPurpose::CountIntersections => "count_intersections",
            DesmosPurpose::EliminateChoices => "eliminate_choices",
            DesmosPurpose::VerifySolution => "verify_solution",
        }
    }
}

/// A graph for the Desmos calculator.  Expressions are LaTeX.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesmosConfig {
    pub expressions: Vec<String>,
    #[serde(default)]
    pub sliders: Option<Vec<String>>,
    /// Suggested window, e.g. `x∈[-10,10], y∈[-10,10]`.
    #[serde(default)]
    pub viewport: Option<String>,
    pub purpose: DesmosPurpose,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    pub step_id: u32,
    pub description: String,
    pub derivation: String,
    #[serde(default)]
    pub formulas: Vec<String>,
    #[serde(default)]
    pub intermediate_result: Option<String>,
    pub required_knowledge: Vec<KnowledgeItem>,
    #[serde(default)]
    pub common_traps: Option<Vec<String>>,
    #[serde(default)]
    pub quick_check: Option<String>,
    #[serde(default)]
    pub desmos: Option<DesmosConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproachType {
    Algebraic,
    FormulaBased,
    GeometricReasoning,
    DataAnalysis,
    ExamTrick,
    DesmosFirst,
}

impl ApproachType {
    /// Short label shown next to a solution path.
    pub fn label(self) -> &'static str {
        match self {
            ApproachType::Algebraic => "Algebra",
            ApproachType::FormulaBased => "Formula-based",
            ApproachType::GeometricReasoning => "Geometric reasoning",
            ApproachType::DataAnalysis => "Data analysis",
            ApproachType::ExamTrick => "Exam smartness",
            ApproachType::DesmosFirst => "Desmos / Graph",
        }
    }
}

impl Display for ApproachType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conclusion {
    pub final_answer: String,
    #[serde(default)]
    pub approximation: Option<String>,
    #[serde(default)]
    pub answer_spec: Option<AnswerSpec>,
    #[serde(default)]
    pub verification: Option<Vec<String>>,
    #[serde(default)]
    pub why_others_wrong: Option<Vec<String>>,
}

/// One approach to the problem, worked step by step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionPath {
    pub path_id: String,
    pub approach_type: ApproachType,
    pub title: String,
    pub planning: Planning,
    pub steps: Vec<SolutionStep>,
    pub conclusion: Conclusion,
    pub required_knowledge: Vec<KnowledgeItem>,
    #[serde(default)]
    pub pros: Option<String>,
    #[serde(default)]
    pub cons: Option<String>,
    #[serde(default)]
    pub best_when: Option<String>,
    #[serde(default)]
    pub desmos_overview: Option<DesmosConfig>,
}

impl SolutionPath {
    /// The heading shown for this path.  Exam-trick paths are always presented
    /// as trying the given answer choices, whatever the backend titled them.
    pub fn display_title(&self) -> &str {
        match self.approach_type {
            ApproachType::ExamTrick => "Try the given answer choices",
            _ => &self.title,
        }
    }
}
