//! Character creation wizard.
//!
//! Four steps: identity (name and optional appearance), constitution,
//! origin and Session Zero. Each step gates the next on its required
//! choice. Session Zero questions are fetched once when leaving the origin
//! step; the character is submitted when the last question is answered.

use crate::models::{
    find_constitution, find_origin, Constitution, CreateCharacterRequest, OriginLocation,
    SessionZeroRequest, CONSTITUTIONS, ORIGINS,
};

/// Status line shown when creating the character fails.
pub const CREATE_FAILED: &str = "Erro ao criar personagem. Tente novamente.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Identity,
    Constitution,
    Origin,
    SessionZero,
}

impl WizardStep {
    /// 1-based position, for "Etapa N de 4".
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Identity => 1,
            WizardStep::Constitution => 2,
            WizardStep::Origin => 3,
            WizardStep::SessionZero => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Identity => "Nome do Cultivador",
            WizardStep::Constitution => "Constituição",
            WizardStep::Origin => "Local de Origem",
            WizardStep::SessionZero => "Session Zero",
        }
    }
}

/// Text field being edited on the identity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    Appearance,
}

/// Result of trying to move forward.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAdvance {
    /// Moved to the next step.
    Moved,
    /// Session Zero questions must be fetched before moving on.
    NeedQuestions(SessionZeroRequest),
    /// The current step is incomplete or a request is pending.
    Blocked,
}

#[derive(Debug)]
pub struct CreationWizard {
    step: WizardStep,
    pub name: String,
    pub appearance: String,
    pub field: IdentityField,
    constitution_cursor: usize,
    constitution: Option<&'static str>,
    origin_cursor: usize,
    origin: Option<&'static str>,
    questions: Vec<String>,
    answers: Vec<String>,
    /// Answer to the current Session Zero question.
    pub answer: String,
    loading: bool,
    status: Option<String>,
}

impl Default for CreationWizard {
    fn default() -> Self {
        Self {
            step: WizardStep::Identity,
            name: String::new(),
            appearance: String::new(),
            field: IdentityField::Name,
            constitution_cursor: 0,
            constitution: None,
            origin_cursor: 0,
            origin: None,
            questions: Vec::new(),
            answers: Vec::new(),
            answer: String::new(),
            loading: false,
            status: None,
        }
    }
}

impl CreationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn constitution_cursor(&self) -> usize {
        self.constitution_cursor
    }

    pub fn origin_cursor(&self) -> usize {
        self.origin_cursor
    }

    pub fn constitution(&self) -> Option<&'static Constitution> {
        self.constitution.and_then(find_constitution)
    }

    pub fn origin(&self) -> Option<&'static OriginLocation> {
        self.origin.and_then(find_origin)
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Current Session Zero question with its 0-based index.
    pub fn current_question(&self) -> Option<(usize, &str)> {
        let idx = self.answers.len();
        self.questions.get(idx).map(|q| (idx, q.as_str()))
    }

    /// Whether the current step has what it needs.
    pub fn can_advance(&self) -> bool {
        if self.loading {
            return false;
        }
        match self.step {
            WizardStep::Identity => !self.name.trim().is_empty(),
            WizardStep::Constitution => self.constitution.is_some(),
            WizardStep::Origin => self.origin.is_some(),
            WizardStep::SessionZero => false,
        }
    }

    pub fn advance(&mut self) -> WizardAdvance {
        if !self.can_advance() {
            return WizardAdvance::Blocked;
        }
        self.status = None;
        match self.step {
            WizardStep::Identity => self.step = WizardStep::Constitution,
            WizardStep::Constitution => self.step = WizardStep::Origin,
            WizardStep::Origin if self.questions.is_empty() => {
                self.loading = true;
                return WizardAdvance::NeedQuestions(self.session_zero_request());
            }
            WizardStep::Origin => self.step = WizardStep::SessionZero,
            WizardStep::SessionZero => return WizardAdvance::Blocked,
        }
        WizardAdvance::Moved
    }

    /// Go back one step. Returns false on the first step or while loading.
    pub fn back(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.status = None;
        self.step = match self.step {
            WizardStep::Identity => return false,
            WizardStep::Constitution => WizardStep::Identity,
            WizardStep::Origin => WizardStep::Constitution,
            WizardStep::SessionZero => WizardStep::Origin,
        };
        true
    }

    /// Move the list cursor on the constitution or origin step.
    pub fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.step {
            WizardStep::Constitution => (&mut self.constitution_cursor, CONSTITUTIONS.len()),
            WizardStep::Origin => (&mut self.origin_cursor, ORIGINS.len()),
            _ => return,
        };
        *cursor = (*cursor as isize + delta).rem_euclid(len as isize) as usize;
    }

    /// Choose the entry under the cursor.
    pub fn choose(&mut self) {
        match self.step {
            WizardStep::Constitution => {
                self.constitution = CONSTITUTIONS.get(self.constitution_cursor).map(|c| c.id)
            }
            WizardStep::Origin => self.origin = ORIGINS.get(self.origin_cursor).map(|o| o.id),
            _ => {}
        }
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            IdentityField::Name => IdentityField::Appearance,
            IdentityField::Appearance => IdentityField::Name,
        };
    }

    /// Type into whichever text field the step edits.
    pub fn input_char(&mut self, c: char) {
        if let Some(text) = self.active_text() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.active_text() {
            text.pop();
        }
    }

    fn active_text(&mut self) -> Option<&mut String> {
        if self.loading {
            return None;
        }
        match (self.step, self.field) {
            (WizardStep::Identity, IdentityField::Name) => Some(&mut self.name),
            (WizardStep::Identity, IdentityField::Appearance) => Some(&mut self.appearance),
            (WizardStep::SessionZero, _) => Some(&mut self.answer),
            _ => None,
        }
    }

    pub fn session_zero_request(&self) -> SessionZeroRequest {
        SessionZeroRequest {
            name: self.name.trim().to_string(),
            constitution: self.constitution.unwrap_or_default().to_string(),
            origin_location: self.origin.unwrap_or_default().to_string(),
        }
    }

    /// Questions arrived; enter Session Zero.
    pub fn apply_questions(&mut self, questions: Vec<String>) {
        self.questions = questions;
        self.answers.clear();
        self.loading = false;
        self.step = WizardStep::SessionZero;
    }

    /// Record the current answer. Returns the creation request once every
    /// question is answered.
    pub fn submit_answer(&mut self) -> Option<CreateCharacterRequest> {
        if self.loading || self.step != WizardStep::SessionZero {
            return None;
        }
        let answer = self.answer.trim();
        if answer.is_empty() || self.current_question().is_none() {
            return None;
        }
        self.answers.push(answer.to_string());
        self.answer.clear();

        if self.answers.len() >= self.questions.len() {
            self.loading = true;
            self.status = None;
            Some(self.build_request())
        } else {
            None
        }
    }

    /// Creation failed: reopen the last answer so it can be submitted again.
    pub fn fail_submit(&mut self) {
        self.loading = false;
        self.status = Some(CREATE_FAILED.to_string());
        if let Some(last) = self.answers.pop() {
            self.answer = last;
        }
    }

    /// Each question followed by its answer, blocks separated by a blank line.
    pub fn backstory(&self) -> String {
        self.questions
            .iter()
            .zip(&self.answers)
            .map(|(q, a)| format!("{}\n{}", q, a))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn build_request(&self) -> CreateCharacterRequest {
        let appearance = self.appearance.trim();
        CreateCharacterRequest {
            name: self.name.trim().to_string(),
            appearance: (!appearance.is_empty()).then(|| appearance.to_string()),
            constitution: self.constitution.unwrap_or_default().to_string(),
            origin_location: self.origin.unwrap_or_default().to_string(),
            backstory: self.backstory(),
            session_zero_answers: self.answers.clone(),
        }
    }
}
