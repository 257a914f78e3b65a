//! In-memory quote draft and the vocabulary tables translating between the
//! form's option values and the backend's display strings.
//!
//! The draft only ever holds values from its own enums; the AI service's
//! phrasings are translated on the way in and the backend labels on the way
//! out. Unknown AI phrasings fall back to [`ProjectType::Custom`].

use crate::api::{AiSuggestions, ClientInfo, EstimationDetails, EstimationRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Showcase,
    Ecommerce,
    WebApp,
    MobileApp,
    Custom,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Showcase,
        ProjectType::Ecommerce,
        ProjectType::WebApp,
        ProjectType::MobileApp,
        ProjectType::Custom,
    ];

    /// Maps the AI service's phrasing onto our enum. Anything unrecognized is
    /// a custom project.
    pub fn from_backend_label(label: &str) -> ProjectType {
        match label {
            "Site Vitrine" | "Vitrine" => ProjectType::Showcase,
            "Site E-commerce" | "E-commerce" => ProjectType::Ecommerce,
            "Application Web" => ProjectType::WebApp,
            "Application Mobile" => ProjectType::MobileApp,
            _ => ProjectType::Custom,
        }
    }

    /// The display string the backend expects in estimation requests.
    pub fn backend_label(self) -> &'static str {
        match self {
            ProjectType::Showcase => "Site Vitrine",
            ProjectType::Ecommerce => "Site E-commerce",
            ProjectType::WebApp => "Application Web",
            ProjectType::MobileApp => "Application Mobile",
            ProjectType::Custom => "Projet Sur Mesure",
        }
    }

    /// Value attribute used by the project-type select control.
    pub fn form_value(self) -> &'static str {
        match self {
            ProjectType::Showcase => "site_vitrine",
            ProjectType::Ecommerce => "site_ecommerce",
            ProjectType::WebApp => "application_web",
            ProjectType::MobileApp => "application_mobile",
            ProjectType::Custom => "custom",
        }
    }

    pub fn from_form_value(value: &str) -> Option<ProjectType> {
        Self::ALL.iter().copied().find(|t| t.form_value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeline {
    Rapide,
    Normal,
    Flexible,
}

impl Timeline {
    pub const ALL: [Timeline; 3] = [Timeline::Rapide, Timeline::Normal, Timeline::Flexible];

    pub fn label(self) -> &'static str {
        match self {
            Timeline::Rapide => "Rapide",
            Timeline::Normal => "Normal",
            Timeline::Flexible => "Flexible",
        }
    }

    pub fn from_label(label: &str) -> Option<Timeline> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetRange {
    Under5k,
    From5kTo10k,
    From10kTo20k,
    Over20k,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 4] = [
        BudgetRange::Under5k,
        BudgetRange::From5kTo10k,
        BudgetRange::From10kTo20k,
        BudgetRange::Over20k,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetRange::Under5k => "Moins de 5 000€",
            BudgetRange::From5kTo10k => "5 000€ - 10 000€",
            BudgetRange::From10kTo20k => "10 000€ - 20 000€",
            BudgetRange::Over20k => "Plus de 20 000€",
        }
    }

    pub fn from_label(label: &str) -> Option<BudgetRange> {
        Self::ALL.iter().copied().find(|b| b.label() == label)
    }
}

/// The wizard's in-progress form data. Lives only while the dialog is open;
/// reset to empty on successful submission or close.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteDraft {
    pub description: String,
    pub project_type: Option<ProjectType>,
    /// Raw input string so the field can round-trip what the user typed.
    pub page_count: String,
    pub features: Vec<String>,
    pub timeline: Option<Timeline>,
    pub budget: Option<BudgetRange>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl QuoteDraft {
    /// Merges an AI suggestion into the draft. Fields the service did not
    /// fill in keep their previous value; unknown vocabulary falls back per
    /// the table rules.
    pub fn apply_suggestions(&mut self, suggestions: &AiSuggestions) {
        if let Some(label) = &suggestions.type_projet {
            self.project_type = Some(ProjectType::from_backend_label(label));
        }
        if let Some(pages) = suggestions.nombre_pages {
            self.page_count = pages.to_string();
        }
        if let Some(label) = &suggestions.delai_souhaite {
            if let Some(timeline) = Timeline::from_label(label) {
                self.timeline = Some(timeline);
            }
        }
        if let Some(label) = &suggestions.budget {
            if let Some(budget) = BudgetRange::from_label(label) {
                self.budget = Some(budget);
            }
        }
        if let Some(pages) = &suggestions.liste_pages {
            self.features = pages.clone();
        }
    }

    /// Builds the wire-format request. Enum fields translate back to the
    /// backend's display vocabulary; unset selections become empty strings
    /// and a non-numeric page count becomes 0.
    pub fn to_estimation_request(&self) -> EstimationRequest {
        EstimationRequest {
            client: ClientInfo {
                email: self.email.clone(),
                nom: self.full_name.clone(),
                telephone: self.phone.clone(),
                entreprise: self.company.clone(),
            },
            estimation: EstimationDetails {
                description_projet: self.description.clone(),
                type_projet: self
                    .project_type
                    .map(|t| t.backend_label().to_string())
                    .unwrap_or_default(),
                nombre_pages: self.page_count.trim().parse().unwrap_or(0),
                delai_souhaite: self
                    .timeline
                    .map(|t| t.label().to_string())
                    .unwrap_or_default(),
                budget: self.budget.map(|b| b.label().to_string()).unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_phrasings_map_deterministically() {
        assert_eq!(ProjectType::from_backend_label("Site Vitrine"), ProjectType::Showcase);
        assert_eq!(ProjectType::from_backend_label("Vitrine"), ProjectType::Showcase);
        assert_eq!(ProjectType::from_backend_label("Site E-commerce"), ProjectType::Ecommerce);
        assert_eq!(ProjectType::from_backend_label("E-commerce"), ProjectType::Ecommerce);
        assert_eq!(ProjectType::from_backend_label("Application Web"), ProjectType::WebApp);
        assert_eq!(ProjectType::from_backend_label("Application Mobile"), ProjectType::MobileApp);
    }

    #[test]
    fn unrecognized_phrasing_falls_back_to_custom() {
        assert_eq!(ProjectType::from_backend_label("Blockchain dApp"), ProjectType::Custom);
        assert_eq!(ProjectType::from_backend_label(""), ProjectType::Custom);
    }

    #[test]
    fn backend_labels_round_trip_for_every_variant() {
        for project_type in ProjectType::ALL {
            // Custom's label is not in the forward table and intentionally
            // maps back to Custom.
            assert_eq!(
                ProjectType::from_backend_label(project_type.backend_label()),
                project_type
            );
        }
        for timeline in Timeline::ALL {
            assert_eq!(Timeline::from_label(timeline.label()), Some(timeline));
        }
        for budget in BudgetRange::ALL {
            assert_eq!(BudgetRange::from_label(budget.label()), Some(budget));
        }
    }

    #[test]
    fn form_values_round_trip() {
        for project_type in ProjectType::ALL {
            assert_eq!(
                ProjectType::from_form_value(project_type.form_value()),
                Some(project_type)
            );
        }
        assert_eq!(ProjectType::from_form_value("autre"), None);
    }

    #[test]
    fn suggestions_merge_keeps_prior_values_when_absent() {
        let mut draft = QuoteDraft {
            page_count: "5".into(),
            timeline: Some(Timeline::Flexible),
            ..QuoteDraft::default()
        };
        draft.apply_suggestions(&AiSuggestions {
            type_projet: Some("E-commerce".into()),
            nombre_pages: None,
            delai_souhaite: Some("un trimestre".into()), // unknown, keep prior
            budget: None,
            liste_pages: None,
        });
        assert_eq!(draft.project_type, Some(ProjectType::Ecommerce));
        assert_eq!(draft.page_count, "5");
        assert_eq!(draft.timeline, Some(Timeline::Flexible));
        assert_eq!(draft.budget, None);
    }

    #[test]
    fn suggestions_merge_copies_present_fields() {
        let mut draft = QuoteDraft::default();
        draft.apply_suggestions(&AiSuggestions {
            type_projet: Some("Site Vitrine".into()),
            nombre_pages: Some(12),
            delai_souhaite: Some("Rapide".into()),
            budget: Some("Plus de 20 000€".into()),
            liste_pages: Some(vec!["Accueil".into(), "Contact".into()]),
        });
        assert_eq!(draft.project_type, Some(ProjectType::Showcase));
        assert_eq!(draft.page_count, "12");
        assert_eq!(draft.timeline, Some(Timeline::Rapide));
        assert_eq!(draft.budget, Some(BudgetRange::Over20k));
        assert_eq!(draft.features, vec!["Accueil".to_string(), "Contact".to_string()]);
    }

    #[test]
    fn explicitly_empty_page_list_clears_prior_features() {
        let mut draft = QuoteDraft {
            features: vec!["Accueil".into()],
            ..QuoteDraft::default()
        };
        draft.apply_suggestions(&AiSuggestions {
            liste_pages: Some(vec![]),
            ..AiSuggestions::default()
        });
        assert!(draft.features.is_empty());
    }

    #[test]
    fn estimation_request_translates_vocabulary() {
        let draft = QuoteDraft {
            description: "Une boutique artisanale".into(),
            project_type: Some(ProjectType::Ecommerce),
            page_count: "20".into(),
            timeline: Some(Timeline::Normal),
            budget: Some(BudgetRange::From5kTo10k),
            full_name: "Jean Dupont".into(),
            email: "jean@entreprise.fr".into(),
            ..QuoteDraft::default()
        };
        let request = draft.to_estimation_request();
        assert_eq!(request.estimation.type_projet, "Site E-commerce");
        assert_eq!(request.estimation.nombre_pages, 20);
        assert_eq!(request.estimation.delai_souhaite, "Normal");
        assert_eq!(request.estimation.budget, "5 000€ - 10 000€");
        assert_eq!(request.client.nom, "Jean Dupont");
    }

    #[test]
    fn estimation_request_defaults_unset_fields() {
        let draft = QuoteDraft {
            page_count: "beaucoup".into(),
            ..QuoteDraft::default()
        };
        let request = draft.to_estimation_request();
        assert_eq!(request.estimation.type_projet, "");
        assert_eq!(request.estimation.nombre_pages, 0);
        assert_eq!(request.estimation.delai_souhaite, "");
        assert_eq!(request.estimation.budget, "");
    }
}
