use super::domain::Question;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate question id {0}")]
    DuplicateQuestionId(String),
}

/// Ordered questionnaire definition the engine scores against.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds a catalog from externally supplied questions, rejecting
    /// duplicate ids. Duplicates would double-count score ceilings, so they
    /// fail here instead of skewing every later computation.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestionId(question.id.clone()));
            }
        }

        Ok(Self { questions })
    }

    /// The shipped 60-question HR instrument.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn question(
    id: &str,
    text: &str,
    functions: &[(&str, f32)],
    traits: &[(&str, f32)],
    levels: &[(&str, f32)],
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        function_weights: weights(functions),
        trait_weights: weights(traits),
        level_weights: weights(levels),
    }
}

fn weights(entries: &[(&str, f32)]) -> BTreeMap<String, f32> {
    entries
        .iter()
        .map(|(name, weight)| (name.to_string(), *weight))
        .collect()
}

fn standard_questions() -> Vec<Question> {
    vec![
        // General HR mindset / operations
        question(
            "Q01",
            "I enjoy solving day-to-day employee requests quickly and accurately.",
            &[("HR Operations", 2.0), ("Employee Relations", 1.0)],
            &[("People-centric", 1.0), ("Process-oriented", 2.0)],
            &[("Execution", 2.0)],
        ),
        question(
            "Q02",
            "I like working with policies and ensuring consistent application across employees.",
            &[("Employee Relations", 2.0), ("HR Operations", 2.0)],
            &[("Process-oriented", 2.0), ("People-centric", 1.0)],
            &[("Execution", 1.0), ("Ownership", 1.0)],
        ),
        question(
            "Q03",
            "I feel confident explaining HR policies in a calm and fair way during sensitive conversations.",
            &[("Employee Relations", 3.0)],
            &[("People-centric", 3.0)],
            &[("Execution", 1.0), ("Leadership", 1.0)],
        ),
        question(
            "Q04",
            "I enjoy creating checklists, templates, and standard workflows to reduce errors.",
            &[("HR Operations", 3.0), ("HRIS / HR Technology", 1.0)],
            &[("Process-oriented", 3.0), ("Tech-savvy", 1.0)],
            &[("Ownership", 1.0), ("Execution", 1.0)],
        ),
        question(
            "Q05",
            "I prefer structured work with clear deadlines and measurable accuracy.",
            &[("HR Operations", 2.0), ("Compensation & Benefits", 1.0)],
            &[("Process-oriented", 2.0)],
            &[("Execution", 2.0)],
        ),
        // Talent acquisition
        question(
            "Q06",
            "I enjoy sourcing candidates and reaching out proactively to build pipelines.",
            &[("Talent Acquisition", 3.0)],
            &[("People-centric", 2.0), ("Learning agility", 1.0)],
            &[("Execution", 1.0), ("Ownership", 1.0)],
        ),
        question(
            "Q07",
            "I can assess a candidate's fit using structured interviews and competency questions.",
            &[("Talent Acquisition", 3.0), ("Talent Management", 1.0)],
            &[("People-centric", 2.0), ("Analytical", 1.0)],
            &[("Ownership", 1.0)],
        ),
        question(
            "Q08",
            "I enjoy negotiating offers and aligning expectations between candidates and hiring managers.",
            &[("Talent Acquisition", 2.0), ("HR Operations", 1.0)],
            &[("People-centric", 2.0)],
            &[("Leadership", 1.0), ("Ownership", 1.0)],
        ),
        question(
            "Q09",
            "I like tracking recruitment metrics (time-to-fill, quality of hire) and improving the process.",
            &[("Talent Acquisition", 2.0), ("HR Analytics", 2.0)],
            &[("Analytical", 2.0), ("Process-oriented", 1.0)],
            &[("Ownership", 1.0), ("Strategy", 1.0)],
        ),
        question(
            "Q10",
            "I’m comfortable handling high-volume hiring without compromising candidate experience.",
            &[("Talent Acquisition", 2.0)],
            &[("People-centric", 1.0), ("Process-oriented", 1.0)],
            &[("Execution", 2.0)],
        ),
        // Compensation & benefits / total rewards
        question(
            "Q11",
            "I enjoy working with numbers like salary structures, allowances, and benefits costs.",
            &[("Compensation & Benefits", 3.0), ("HR Analytics", 1.0)],
            &[("Analytical", 2.0)],
            &[("Execution", 1.0), ("Ownership", 1.0)],
        ),
        question(
            "Q12",
            "I prefer roles where accuracy and compliance are critical.",
            &[("Compensation & Benefits", 2.0), ("HR Operations", 2.0)],
            &[("Process-oriented", 2.0)],
            &[("Execution", 2.0)],
        ),
        question(
            "Q13",
            "I like explaining pay or benefits decisions in a clear and respectful way.",
            &[("Compensation & Benefits", 2.0), ("Employee Relations", 1.0)],
            &[("People-centric", 2.0)],
            &[("Leadership", 1.0)],
        ),
        question(
            "Q14",
            "I enjoy analyzing internal equity and proposing compensation improvements.",
            &[
                ("Compensation & Benefits", 2.0),
                ("HR Analytics", 2.0),
                ("Organizational Development", 1.0),
            ],
            &[("Analytical", 2.0), ("Strategic", 1.0)],
            &[("Strategy", 1.0), ("Ownership", 1.0)],
        ),
        question(
            "Q15",
            "I like benchmarking jobs and pay against external market data.",
            &[("Compensation & Benefits", 3.0)],
            &[("Analytical", 2.0), ("Strategic", 1.0)],
            &[("Strategy", 1.0)],
        ),
        // HRIS / HR technology
        question(
            "Q16",
            "I enjoy configuring systems, fields, workflows, or forms to make HR processes smoother.",
            &[("HRIS / HR Technology", 3.0), ("HR Operations", 1.0)],
            &[("Tech-savvy", 3.0), ("Process-oriented", 1.0)],
            &[("Ownership", 1.0)],
        ),
        question(
            "Q17",
            "I feel energized when troubleshooting system issues and finding the root cause.",
            &[("HRIS / HR Technology", 3.0)],
            &[("Tech-savvy", 2.0), ("Analytical", 1.0)],
            &[("Execution", 1.0), ("Ownership", 1.0)],
        ),
        question(
            "Q18",
            "I like translating HR requirements into clear technical requirements for IT or vendors.",
            &[("HRIS / HR Technology", 2.0), ("HR Operations", 1.0)],
            &[("Tech-savvy", 2.0), ("Strategic", 1.0)],
            &[("Ownership", 1.0), ("Leadership", 1.0)],
        ),
        question(
            "Q19",
            "I enjoy improving data quality and ensuring HR records are consistent across systems.",
            &[
                ("HRIS / HR Technology", 2.0),
                ("HR Operations", 2.0),
                ("HR Analytics", 1.0),
            ],
            &[("Process-oriented", 2.0), ("Analytical", 1.0)],
            &[("Execution", 2.0)],
        ),
        question(
            "Q20",
            "I prefer building dashboards or self-service reports rather than manual reporting.",
            &[("HR Analytics", 2.0), ("HRIS / HR Technology", 2.0)],
            &[("Analytical", 2.0), ("Tech-savvy", 1.0)],
            &[("Ownership", 1.0)],
        ),
        // Learning & development
        question(
            "Q21",
            "I enjoy designing training programs and learning journeys.",
            &[("Learning & Development", 3.0), ("Talent Management", 1.0)],
            &[
                ("People-centric", 1.0),
                ("Strategic", 1.0),
                ("Learning agility", 1.0),
            ],
            &[("Ownership", 1.0)],
        ),
        question(
            "Q22",
            "I like facilitating workshops and keeping people engaged in learning sessions.",
            &[("Learning & Development", 3.0)],
            &[("People-centric", 2.0)],
            &[("Leadership", 1.0), ("Execution", 1.0)],
        ),
        question(
            "Q23",
            "I enjoy building competency frameworks and linking them to development plans.",
            &[
                ("Learning & Development", 2.0),
                ("Organizational Development", 2.0),
                ("Talent Management", 1.0),
            ],
            &[("Strategic", 2.0), ("Analytical", 1.0)],
            &[("Strategy", 1.0)],
        ),
        question(
            "Q24",
            "I like measuring training impact (behavior change, performance outcomes) not just attendance.",
            &[
                ("Learning & Development", 2.0),
                ("HR Analytics", 2.0),
                ("Performance Management", 1.0),
            ],
            &[("Analytical", 2.0), ("Strategic", 1.0)],
            &[("Strategy", 1.0), ("Ownership", 1.0)],
        ),
        question(
            "Q25",
            "I can coach others and give feedback that helps them improve.",
            &[("Learning & Development", 2.0), ("Performance Management", 2.0)],
            &[("People-centric", 2.0)],
            &[("Leadership", 2.0)],
        ),
        // Employee relations
        question(
            "Q26",
            "I’m comfortable investigating workplace issues and documenting cases carefully.",
            &[("Employee Relations", 3.0)],
            &[
                ("Process-oriented", 1.0),
                ("Analytical", 1.0),
                ("People-centric", 1.0),
            ],
            &[("Ownership", 1.0)],
        ),
        question(
            "Q27",
            "I prefer preventing conflict through early intervention and clear expectations.",
            &[("Employee Relations", 2.0), ("Organizational Development", 1.0)],
            &[("People-centric", 2.0), ("Strategic", 1.0)],
            &[("Strategy", 1.0)],
        ),
        question(
            "Q28",
            "I can stay neutral and fair even when people are emotional or upset.",
            &[("Employee Relations", 3.0)],
            &[("People-centric", 2.0)],
            &[("Leadership", 1.0), ("Execution", 1.0)],
        ),
        question(
            "Q29",
            "I’m confident in handling disciplinary processes with empathy and compliance.",
            &[("Employee Relations", 3.0), ("HR Operations", 1.0)],
            &[("People-centric", 1.0), ("Process-oriented", 1.0)],
            &[("Ownership", 1.0)],
        ),
        question(
            "Q30",
            "I enjoy building trust with managers so they consult HR early, not only when problems escalate.",
            &[
                ("Employee Relations", 2.0),
                ("Organizational Development", 1.0),
                ("Talent Management", 1.0),
            ],
            &[("People-centric", 2.0), ("Strategic", 1.0)],
            &[("Leadership", 1.0)],
        ),
        // Organizational development / culture / change
        question(
            "Q31",
            "I enjoy shaping culture initiatives (values, engagement, communication) across the organization.",
            &[("Organizational Development", 3.0), ("Talent Management", 1.0)],
            &[("Strategic", 2.0), ("People-centric", 1.0)],
            &[("Strategy", 2.0)],
        ),
        question(
            "Q32",
            "I like leading change and supporting people through transitions (restructure, new policies, new systems).",
            &[("Organizational Development", 2.0), ("HRIS / HR Technology", 1.0)],
            &[("Strategic", 2.0), ("People-centric", 1.0)],
            &[("Leadership", 2.0)],
        ),
        question(
            "Q33",
            "I enjoy diagnosing organizational issues using surveys, interviews, and data.",
            &[("Organizational Development", 2.0), ("HR Analytics", 2.0)],
            &[("Analytical", 2.0), ("Strategic", 1.0)],
            &[("Strategy", 1.0)],
        ),
        question(
            "Q34",
            "I prefer roles where I influence leadership decisions and long-term workforce strategy.",
            &[("Organizational Development", 2.0), ("Talent Management", 2.0)],
            &[("Strategic", 3.0)],
            &[("Strategy", 2.0), ("Leadership", 1.0)],
        ),
        question(
            "Q35",
            "I enjoy building new HR programs from scratch and iterating them based on feedback.",
            &[
                ("Organizational Development", 2.0),
                ("Learning & Development", 1.0),
                ("Performance Management", 1.0),
            ],
            &[("Strategic", 1.0), ("Learning agility", 2.0)],
            &[("Ownership", 1.0), ("Strategy", 1.0)],
        ),
        // Performance management
        question(
            "Q36",
            "I enjoy helping managers set clear goals and performance expectations.",
            &[("Performance Management", 3.0), ("Talent Management", 1.0)],
            &[("People-centric", 1.0), ("Strategic", 1.0)],
            &[("Ownership", 1.0)],
        ),
        question(
            "Q37",
            "I like building fair evaluation systems (ratings, calibration, feedback cycles).",
            &[("Performance Management", 2.0), ("Organizational Development", 1.0)],
            &[("Process-oriented", 2.0), ("Strategic", 1.0)],
            &[("Strategy", 1.0)],
        ),
        question(
            "Q38",
            "I’m comfortable challenging a manager respectfully when performance decisions are biased or inconsistent.",
            &[("Performance Management", 2.0), ("Employee Relations", 1.0)],
            &[("People-centric", 1.0), ("Leadership", 0.0)],
            &[("Leadership", 2.0)],
        ),
        question(
            "Q39",
            "I prefer performance improvement conversations that balance accountability and support.",
            &[("Performance Management", 2.0), ("Employee Relations", 1.0)],
            &[("People-centric", 2.0)],
            &[("Leadership", 1.0)],
        ),
        question(
            "Q40",
            "I enjoy linking performance outcomes to development and rewards in a fair way.",
            &[
                ("Performance Management", 2.0),
                ("Compensation & Benefits", 1.0),
                ("Talent Management", 1.0),
            ],
            &[("Strategic", 1.0), ("Analytical", 1.0)],
            &[("Strategy", 1.0)],
        ),
        // HR analytics
        question(
            "Q41",
            "I enjoy turning HR data into insights that leadership can act on.",
            &[("HR Analytics", 3.0), ("Organizational Development", 1.0)],
            &[("Analytical", 3.0), ("Strategic", 1.0)],
            &[("Strategy", 1.0)],
        ),
        question(
            "Q42",
            "I like building dashboards and tracking trends (attrition, headcount, engagement).",
            &[("HR Analytics", 3.0), ("HRIS / HR Technology", 1.0)],
            &[("Analytical", 2.0), ("Tech-savvy", 1.0)],
            &[("Ownership", 1.0)],
        ),
        question(
            "Q43",
            "I enjoy running root-cause analysis and testing hypotheses using data.",
            &[("HR Analytics", 3.0)],
            &[("Analytical", 3.0)],
            &[("Strategy", 1.0)],
        ),
        question(
            "Q44",
            "I prefer decisions backed by evidence, even when it requires extra analysis.",
            &[("HR Analytics", 2.0), ("Compensation & Benefits", 1.0)],
            &[("Analytical", 2.0)],
            &[("Ownership", 1.0)],
        ),
        question(
            "Q45",
            "I enjoy explaining complex numbers in a simple way for non-technical stakeholders.",
            &[("HR Analytics", 2.0), ("Compensation & Benefits", 1.0)],
            &[("Analytical", 1.0), ("People-centric", 1.0)],
            &[("Leadership", 1.0)],
        ),
        // Talent management (succession, mobility, career paths)
        question(
            "Q46",
            "I enjoy identifying high-potential employees and planning development paths.",
            &[("Talent Management", 3.0), ("Learning & Development", 1.0)],
            &[("Strategic", 2.0), ("People-centric", 1.0)],
            &[("Strategy", 1.0)],
        ),
        question(
            "Q47",
            "I like building succession plans and supporting internal mobility.",
            &[("Talent Management", 3.0), ("Organizational Development", 1.0)],
            &[("Strategic", 2.0)],
            &[("Strategy", 1.0)],
        ),
        question(
            "Q48",
            "I enjoy designing competency models and career ladders.",
            &[("Talent Management", 2.0), ("Organizational Development", 2.0)],
            &[("Strategic", 2.0), ("Analytical", 1.0)],
            &[("Strategy", 1.0)],
        ),
        question(
            "Q49",
            "I like working with leaders to align talent decisions with business goals.",
            &[("Talent Management", 2.0), ("Organizational Development", 1.0)],
            &[("Strategic", 2.0), ("People-centric", 1.0)],
            &[("Leadership", 1.0), ("Strategy", 1.0)],
        ),
        question(
            "Q50",
            "I prefer long-term talent planning over only reacting to urgent vacancies.",
            &[("Talent Management", 2.0), ("Organizational Development", 1.0)],
            &[("Strategic", 2.0)],
            &[("Strategy", 2.0)],
        ),
        // Cross-functional hybrids
        question(
            "Q51",
            "I enjoy creating HR playbooks and service catalogs that improve consistency across regions/teams.",
            &[
                ("HR Operations", 2.0),
                ("Organizational Development", 1.0),
                ("HRIS / HR Technology", 1.0),
            ],
            &[("Process-oriented", 2.0), ("Strategic", 1.0)],
            &[("Ownership", 1.0), ("Strategy", 1.0)],
        ),
        question(
            "Q52",
            "I like presenting HR recommendations to stakeholders and handling tough questions confidently.",
            &[
                ("Organizational Development", 1.0),
                ("HR Analytics", 1.0),
                ("Talent Management", 1.0),
            ],
            &[("Strategic", 2.0), ("People-centric", 1.0)],
            &[("Leadership", 2.0)],
        ),
        question(
            "Q53",
            "I feel comfortable working with confidential information and maintaining trust.",
            &[
                ("Employee Relations", 1.0),
                ("Compensation & Benefits", 1.0),
                ("HR Operations", 1.0),
            ],
            &[("People-centric", 1.0), ("Process-oriented", 1.0)],
            &[("Execution", 1.0)],
        ),
        question(
            "Q54",
            "I enjoy learning new HR concepts, tools, or frameworks quickly when needed.",
            &[
                ("HRIS / HR Technology", 1.0),
                ("Learning & Development", 1.0),
                ("HR Analytics", 1.0),
            ],
            &[("Learning agility", 3.0)],
            &[("Ownership", 1.0)],
        ),
        question(
            "Q55",
            "I prefer improving processes rather than repeating the same steps without change.",
            &[
                ("Organizational Development", 1.0),
                ("HRIS / HR Technology", 1.0),
                ("HR Operations", 1.0),
            ],
            &[
                ("Learning agility", 1.0),
                ("Strategic", 1.0),
                ("Process-oriented", 1.0),
            ],
            &[("Ownership", 2.0)],
        ),
        // Level-focused statements, still mapped to functions
        question(
            "Q56",
            "I can independently run an HR process end-to-end and deliver results without close supervision.",
            &[
                ("HR Operations", 1.0),
                ("Talent Acquisition", 1.0),
                ("Compensation & Benefits", 1.0),
            ],
            &[("Process-oriented", 1.0)],
            &[("Ownership", 3.0)],
        ),
        question(
            "Q57",
            "I often spot risks early (compliance, people impact, data quality) and prevent issues before they happen.",
            &[
                ("Employee Relations", 1.0),
                ("HR Operations", 1.0),
                ("HRIS / HR Technology", 1.0),
            ],
            &[("Analytical", 1.0), ("Strategic", 1.0)],
            &[("Strategy", 2.0), ("Ownership", 1.0)],
        ),
        question(
            "Q58",
            "I enjoy mentoring others and helping them become more effective in their roles.",
            &[("Learning & Development", 1.0), ("Talent Management", 1.0)],
            &[("People-centric", 1.0), ("Learning agility", 1.0)],
            &[("Leadership", 3.0)],
        ),
        question(
            "Q59",
            "I can translate business goals into HR priorities and a clear roadmap.",
            &[
                ("Organizational Development", 1.0),
                ("Talent Management", 1.0),
                ("HR Analytics", 1.0),
            ],
            &[("Strategic", 2.0)],
            &[("Strategy", 3.0)],
        ),
        question(
            "Q60",
            "I’m comfortable influencing senior stakeholders even when there is resistance.",
            &[
                ("Organizational Development", 1.0),
                ("Employee Relations", 1.0),
                ("Talent Management", 1.0),
            ],
            &[("People-centric", 1.0), ("Strategic", 1.0)],
            &[("Leadership", 3.0)],
        ),
    ]
}
