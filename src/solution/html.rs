use std::fmt::{self, Write};

use crate::html::{self, escape, write_opening_tag};
use crate::nodes::MathMode;
use crate::parser::options::{Options, Plugins};
use crate::render;

use super::{
    aggregate_answer, CalculatorPolicy, Conclusion, DesmosConfig, DifficultyBand, KnowledgeItem,
    MathSolution, ProblemLocalization, QuestionType, SolutionPath, SolutionStep, Viewport,
};

/// Formats a solution document as HTML.
///
/// `problem` is the original problem text, if the user typed one in.  Every
/// prose field is segmented and rendered, so math in it is typeset through
/// `plugins`; formulas are always presented as display math.
pub fn format_solution(
    solution: &MathSolution,
    problem: Option<&str>,
    options: &Options,
    plugins: &Plugins,
    output: &mut dyn Write,
) -> fmt::Result {
    SolutionFormatter::new(options, plugins, output).format(solution, problem)
}

struct SolutionFormatter<'o> {
    output: &'o mut dyn Write,
    options: &'o Options,
    display_options: Options,
    plugins: &'o Plugins<'o>,
}

impl<'o> SolutionFormatter<'o> {
    fn new(options: &'o Options, plugins: &'o Plugins<'o>, output: &'o mut dyn Write) -> Self {
        let mut display_options = options.clone();
        display_options.parse.display_mode = true;
        SolutionFormatter {
            output,
            options,
            display_options,
            plugins,
        }
    }

    fn format(&mut self, solution: &MathSolution, problem: Option<&str>) -> fmt::Result {
        self.output.write_str("<article class=\"solution\">\n")?;
        self.format_problem(problem)?;
        self.format_localization(solution.localization.as_ref())?;
        self.format_overview(solution)?;

        self.output
            .write_str("<section class=\"paths\">\n<h2>4. Solution paths</h2>\n")?;
        for path in &solution.solution_paths {
            self.format_path(path, solution.is_recommended(path))?;
        }
        self.output.write_str("</section>\n</article>\n")
    }

    fn content(&mut self, text: &str) -> fmt::Result {
        html::format_content(Some(text), self.options, self.plugins, self.output)
    }

    fn formula(&mut self, text: &str) -> fmt::Result {
        html::format_content(Some(text), &self.display_options, self.plugins, self.output)
    }

    fn paragraph(&mut self, class: &str, text: &str) -> fmt::Result {
        write_opening_tag(self.output, "p", [("class", class)])?;
        self.content(text)?;
        self.output.write_str("</p>\n")
    }

    fn labelled(&mut self, label: &str, text: &str) -> fmt::Result {
        write!(self.output, "<p><strong>{}:</strong> ", label)?;
        self.content(text)?;
        self.output.write_str("</p>\n")
    }

    fn list(&mut self, class: &str, items: &[String]) -> fmt::Result {
        write_opening_tag(self.output, "ul", [("class", class)])?;
        self.output.write_str("\n")?;
        for item in items {
            self.output.write_str("<li>")?;
            self.content(item)?;
            self.output.write_str("</li>\n")?;
        }
        self.output.write_str("</ul>\n")
    }

    fn titled_list(&mut self, heading: &str, class: &str, items: Option<&Vec<String>>) -> fmt::Result {
        match items {
            Some(items) if !items.is_empty() => {
                writeln!(self.output, "<h5>{}</h5>", heading)?;
                self.list(class, items)
            }
            _ => Ok(()),
        }
    }

    fn knowledge(&mut self, items: &[KnowledgeItem]) -> fmt::Result {
        if items.is_empty() {
            return Ok(());
        }
        self.output.write_str("<ul class=\"knowledge\">\n")?;
        for item in items {
            self.output.write_str("<li>")?;
            escape(self.output, item.category.label())?;
            self.output.write_str(": ")?;
            escape(self.output, &item.topic)?;
            self.output.write_str("</li>\n")?;
        }
        self.output.write_str("</ul>\n")
    }

    fn format_problem(&mut self, problem: Option<&str>) -> fmt::Result {
        self.output
            .write_str("<section class=\"problem\">\n<h2>1. Problem</h2>\n")?;
        match problem {
            Some(problem) if !problem.trim().is_empty() => self.paragraph("statement", problem)?,
            _ => self.output.write_str(
                "<p class=\"missing\">The original problem is not available \
                 (for example, it was read from an image).</p>\n",
            )?,
        }
        self.output.write_str("</section>\n")
    }

    fn format_localization(&mut self, localization: Option<&ProblemLocalization>) -> fmt::Result {
        self.output.write_str(
            "<section class=\"localization\">\n<h2>2. Translation &amp; vocabulary</h2>\n",
        )?;

        let localization = match localization {
            Some(localization) => localization,
            None => {
                self.output
                    .write_str("<p class=\"missing\">No translation was provided.</p>\n")?;
                return self.output.write_str("</section>\n");
            }
        };

        self.output.write_str("<h3>2.1 Simplified restatement</h3>\n")?;
        self.paragraph("simplified", &localization.simplified_vi)?;

        self.output.write_str("<h3>2.2 Key English vocabulary</h3>\n")?;
        if localization.vocab_notes.is_empty() {
            self.output
                .write_str("<p>No specialised English vocabulary to note.</p>\n")?;
            return self.output.write_str("</section>\n");
        }

        self.output.write_str(
            "<table class=\"vocab\">\n<thead>\n<tr>\n<th>Term (EN)</th>\n<th>Term (VI)</th>\n\
             <th>Part of speech</th>\n<th>Meaning</th>\n<th>Example (EN)</th>\n<th>Note</th>\n\
             </tr>\n</thead>\n<tbody>\n",
        )?;
        for note in &localization.vocab_notes {
            self.output.write_str("<tr>\n")?;
            self.cell(&note.term_en)?;
            self.cell(&note.term_vi)?;
            self.output.write_str("<td>")?;
            escape(self.output, note.part_of_speech.as_deref().unwrap_or("-"))?;
            if let Some(ref register) = note.register {
                self.output.write_str(" <span class=\"register\">")?;
                escape(self.output, register)?;
                self.output.write_str("</span>")?;
            }
            self.output.write_str("</td>\n")?;
            self.cell(&note.definition_vi)?;
            self.cell(note.example_en.as_deref().unwrap_or("-"))?;
            self.cell(note.note_vi.as_deref().unwrap_or("-"))?;
            self.output.write_str("</tr>\n")?;
        }
        self.output.write_str("</tbody>\n</table>\n</section>\n")
    }

    fn cell(&mut self, text: &str) -> fmt::Result {
        self.output.write_str("<td>")?;
        escape(self.output, text)?;
        self.output.write_str("</td>\n")
    }

    fn format_overview(&mut self, solution: &MathSolution) -> fmt::Result {
        let meta = &solution.sat_meta;
        self.output.write_str(
            "<section class=\"overview\">\n<h2>3. Overview</h2>\n\
             <h3>3.1 Domain &amp; difficulty</h3>\n<dl class=\"meta\">\n",
        )?;
        self.term("Question type", question_type_label(meta.question_type))?;
        self.term("Calculator", calculator_label(meta.calculator_policy))?;
        self.term("Domain", meta.skill_domain.label())?;
        if let Some(ref topic) = meta.topic {
            self.term("Topic", topic)?;
        }
        if let Some(difficulty) = meta.difficulty_band {
            self.term("Difficulty", difficulty_label(difficulty))?;
        }
        if let Some(seconds) = meta.time_target_seconds {
            self.term("Target time", &format!("{} seconds", seconds))?;
        }
        self.output.write_str("</dl>\n")?;

        let summary = &solution.summary;
        self.output.write_str("<h3>3.2 Givens</h3>\n")?;
        self.list("givens", &summary.givens)?;
        self.titled_list("Constraints", "constraints", summary.constraints.as_ref())?;
        self.output.write_str("<h5>Goal</h5>\n")?;
        self.paragraph("goal", &summary.goal)?;

        self.output.write_str("<h3>3.3 Required knowledge</h3>\n")?;
        self.knowledge(&summary.required_knowledge)?;

        self.output.write_str("<h3>3.4 Answer</h3>\n")?;
        match aggregate_answer(solution) {
            Some(answer) => self.paragraph("answer", &answer)?,
            None => self.output.write_str(
                "<p class=\"missing\">Not enough information to settle on an answer.</p>\n",
            )?,
        }

        self.output
            .write_str("<h3>3.5 Approaches</h3>\n<ul class=\"approaches\">\n")?;
        for path in &solution.solution_paths {
            self.output.write_str("<li>\n<strong>")?;
            self.content(path.display_title())?;
            self.output.write_str("</strong>")?;
            if solution.is_recommended(path) {
                self.output
                    .write_str(" <em class=\"recommended\">Recommended</em>")?;
            }
            self.output.write_str(" <span class=\"approach\">")?;
            escape(self.output, path.approach_type.label())?;
            self.output.write_str("</span>\n")?;
            if let Some(ref pros) = path.pros {
                self.labelled("Pros", pros)?;
            }
            if let Some(ref best_when) = path.best_when {
                self.labelled("Best when", best_when)?;
            }
            self.output.write_str("</li>\n")?;
        }
        self.output.write_str("</ul>\n</section>\n")
    }

    fn term(&mut self, term: &str, definition: &str) -> fmt::Result {
        write!(self.output, "<dt>{}</dt>\n<dd>", term)?;
        escape(self.output, definition)?;
        self.output.write_str("</dd>\n")
    }

    fn format_path(&mut self, path: &SolutionPath, recommended: bool) -> fmt::Result {
        let class = if recommended { "path recommended" } else { "path" };
        write_opening_tag(
            self.output,
            "div",
            [("class", class), ("id", path.path_id.as_str())],
        )?;
        self.output.write_str("\n")?;
        if recommended {
            self.output
                .write_str("<p class=\"badge\">Recommended approach</p>\n")?;
        }

        self.output.write_str("<h3>")?;
        self.content(path.display_title())?;
        self.output.write_str("</h3>\n<p class=\"approach\">")?;
        escape(self.output, path.approach_type.label())?;
        self.output.write_str("</p>\n")?;

        self.output.write_str("<h4>Strategy</h4>\n")?;
        self.paragraph("strategy", &path.planning.strategy)?;
        self.output.write_str("<h4>Reasoning</h4>\n<ol class=\"reasoning\">\n")?;
        for step in &path.planning.reasoning_flow {
            self.output.write_str("<li>")?;
            self.content(step)?;
            self.output.write_str("</li>\n")?;
        }
        self.output.write_str("</ol>\n")?;
        self.titled_list("Tips", "tips", path.planning.sat_tips.as_ref())?;

        if let Some(ref overview) = path.desmos_overview {
            self.output.write_str("<h4>Graph overview</h4>\n")?;
            self.format_desmos(overview)?;
        }

        self.output.write_str("<h4>Steps</h4>\n")?;
        for (i, step) in path.steps.iter().enumerate() {
            self.format_step(step, i + 1)?;
        }

        self.format_conclusion(path, &path.conclusion)?;
        self.output.write_str("</div>\n")
    }

    fn format_step(&mut self, step: &SolutionStep, number: usize) -> fmt::Result {
        write!(
            self.output,
            "<div class=\"step\">\n<h5><span class=\"step-number\">{}</span> ",
            number
        )?;
        self.content(&step.description)?;
        self.output.write_str("</h5>\n")?;
        self.paragraph("derivation", &step.derivation)?;

        if !step.formulas.is_empty() {
            self.output
                .write_str("<h6>Formulas</h6>\n<ul class=\"formulas\">\n")?;
            for formula in &step.formulas {
                self.output.write_str("<li>")?;
                self.formula(formula)?;
                self.output.write_str("</li>\n")?;
            }
            self.output.write_str("</ul>\n")?;
        }

        if let Some(ref result) = step.intermediate_result {
            self.output
                .write_str("<p class=\"intermediate\"><strong>Result:</strong> ")?;
            self.content(result)?;
            self.output.write_str("</p>\n")?;
        }

        self.knowledge(&step.required_knowledge)?;
        self.titled_list("Common traps", "traps", step.common_traps.as_ref())?;

        if let Some(ref desmos) = step.desmos {
            self.format_desmos(desmos)?;
        }
        self.output.write_str("</div>\n")
    }

    fn format_desmos(&mut self, desmos: &DesmosConfig) -> fmt::Result {
        let expressions = serde_json::to_string(&desmos.expressions).map_err(|_| fmt::Error)?;
        let viewport = desmos
            .viewport
            .as_deref()
            .and_then(Viewport::parse)
            .map(|v| format!("{},{},{},{}", v.left, v.right, v.bottom, v.top));
        let sliders = desmos.sliders.as_ref().map(|s| s.join(","));

        let mut attributes = vec![
            ("class", "desmos"),
            ("data-purpose", desmos.purpose.as_str()),
            ("data-expressions", expressions.as_str()),
        ];
        if let Some(ref viewport) = viewport {
            attributes.push(("data-viewport", viewport.as_str()));
        }
        if let Some(ref sliders) = sliders {
            attributes.push(("data-sliders", sliders.as_str()));
        }
        write_opening_tag(self.output, "div", attributes)?;
        self.output.write_str("</div>\n")?;

        if desmos.expressions.is_empty() {
            return Ok(());
        }
        self.output.write_str("<ul class=\"desmos-expressions\">\n")?;
        for expression in &desmos.expressions {
            let node = render::render_math(expression, MathMode::Inline, self.plugins);
            self.output.write_str("<li>")?;
            html::format_nodes(&[node], self.options, self.output)?;
            self.output.write_str("</li>\n")?;
        }
        self.output.write_str("</ul>\n")
    }

    fn format_conclusion(&mut self, path: &SolutionPath, conclusion: &Conclusion) -> fmt::Result {
        self.output
            .write_str("<div class=\"conclusion\">\n<h4>Conclusion</h4>\n<p class=\"final-answer\">")?;
        self.content(&conclusion.final_answer)?;
        if let Some(ref approximation) = conclusion.approximation {
            self.output.write_str(" <span class=\"approximation\">(≈ ")?;
            self.content(approximation)?;
            self.output.write_str(")</span>")?;
        }
        self.output.write_str("</p>\n")?;
        self.titled_list("Checks", "verification", conclusion.verification.as_ref())?;

        let others = conclusion
            .why_others_wrong
            .as_ref()
            .filter(|reasons| !reasons.is_empty());
        if path.pros.is_some() || path.cons.is_some() || path.best_when.is_some() || others.is_some()
        {
            self.output
                .write_str("<div class=\"evaluation\">\n<h5>Evaluation</h5>\n")?;
            if let Some(ref pros) = path.pros {
                self.labelled("Pros", pros)?;
            }
            if let Some(ref cons) = path.cons {
                self.labelled("Cons", cons)?;
            }
            if let Some(ref best_when) = path.best_when {
                self.labelled("Recommended when", best_when)?;
            }
            if let Some(reasons) = others {
                self.output
                    .write_str("<p><strong>Other answer choices:</strong></p>\n")?;
                self.list("why-others-wrong", reasons)?;
            }
            self.output.write_str("</div>\n")?;
        }
        self.output.write_str("</div>\n")
    }
}

fn question_type_label(question_type: QuestionType) -> &'static str {
    match question_type {
        QuestionType::MultipleChoice => "multiple choice",
        QuestionType::GridIn => "grid in",
    }
}

fn calculator_label(policy: CalculatorPolicy) -> &'static str {
    match policy {
        CalculatorPolicy::NoCalculator => "no calculator",
        CalculatorPolicy::Calculator => "calculator",
    }
}

fn difficulty_label(difficulty: DifficultyBand) -> &'static str {
    match difficulty {
        DifficultyBand::Easy => "easy",
        DifficultyBand::Medium => "medium",
        DifficultyBand::Hard => "hard",
    }
}
