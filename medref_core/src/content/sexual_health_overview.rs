//! Sexual-health overview modules.
//!
//! Multi-level companions to the flat sexual-health database; they link into
//! its entries rather than repeating them.

use super::{case, citation, exam, names, published, tags};
use crate::registry::{ModuleDef, ModuleFamily};
use crate::types::*;

pub const FAMILY: ModuleFamily = ModuleFamily {
    name: "sexual-health",
    modules: &[
        ModuleDef { slug: "sti-overview", build: sti_overview },
        ModuleDef { slug: "sexual-history", build: sexual_history },
    ],
};

fn cdc_sti_2021() -> Citation {
    Citation {
        url: Some("https://www.cdc.gov/std/treatment-guidelines/".into()),
        ..citation(
            "cdc-sti-2021",
            CitationType::Guideline,
            "Sexually Transmitted Infections Treatment Guidelines, 2021",
            &["Workowski KA", "Bachmann LH", "Chan PA"],
            "MMWR Recomm Rep",
        )
    }
}

pub fn sti_overview() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Sexually Transmitted Infections", "STDs"]),
        name_es: Some("Infecciones de Transmisión Sexual".into()),
        levels: levels([
            LevelContent::new(
                1,
                "Infections passed through sexual contact; many cause no symptoms, so testing matters.",
                "Bacterial STIs such as chlamydia, gonorrhea and syphilis are cured with \
                 antibiotics. Viral STIs such as herpes, HPV and HIV are managed long term. \
                 Condoms, vaccines and regular testing all lower risk.",
            )
            .with_terms([
                term("STI", "Sexually transmitted infection"),
                term("asymptomatic", "Having an infection without noticing any symptoms"),
            ])
            .with_counseling([
                "Partners should be tested and treated too.",
                "Avoid sex until seven days after treatment is finished.",
            ]),
            LevelContent::new(
                3,
                "Syndromic presentations (urethritis, cervicitis, genital ulcer, vaginal discharge, PID) map to a short list of organisms.",
                "**Urethritis/cervicitis:** chlamydia, gonorrhea, Mycoplasma genitalium, \
                 trichomonas; NAAT testing. **Genital ulcers:** painful (HSV) versus painless \
                 (primary syphilis, LGV). **Discharge:** bacterial vaginosis, trichomoniasis, \
                 candidiasis. **Ascending infection:** PID, epididymitis. Any new STI diagnosis \
                 warrants HIV and syphilis testing.",
            )
            .with_terms([
                term("NAAT", "Nucleic acid amplification test, preferred for chlamydia and gonorrhea"),
                term("expedited partner therapy", "Giving treatment for a partner without a separate visit"),
            ])
            .with_case(case(
                "Painless ulcer",
                "A 30-year-old presents with a single painless, indurated penile ulcer and rubbery inguinal nodes.",
                "Test for syphilis (treponemal and non-treponemal serology) and HIV; treat with benzathine penicillin G.",
                "Assuming herpes and prescribing acyclovir without syphilis testing.",
            )),
        ]),
        citations: vec![cdc_sti_2021()],
        cross_references: vec![
            cross_ref("chlamydia", ContentType::Condition, Relationship::Child, "Chlamydia"),
            cross_ref("gonorrhea", ContentType::Condition, Relationship::Child, "Gonorrhea"),
            cross_ref("syphilis-primary", ContentType::Condition, Relationship::Child, "Primary Syphilis"),
            cross_ref("herpes-simplex-genital", ContentType::Condition, Relationship::Child, "Genital Herpes"),
            cross_ref("uspstf-sti-screening", ContentType::Topic, Relationship::SeeAlso, "STI Screening"),
            cross_ref("sexual-history", ContentType::Topic, Relationship::Sibling, "Taking a Sexual History"),
        ],
        tags: ContentTags {
            exam_relevance: exam(true, true, &["obgyn", "family-medicine"]),
            ..tags(
                &["reproductive", "infectious"],
                &["sexual-health", "infectious-disease"],
                &["STI", "urethritis", "genital ulcer", "NAAT"],
                ClinicalRelevance::High,
            )
        },
        ..published(
            "sti-overview",
            ContentType::Topic,
            "Sexually Transmitted Infections Overview",
            authored(2026, 2, 3),
        )
    }
}

pub fn sexual_history() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Five Ps", "Sexual Health History"]),
        levels: levels([
            LevelContent::new(
                1,
                "A few private questions that help your clinician offer the right tests and prevention.",
                "Your clinician asks the same questions of every patient. The answers are \
                 confidential and are only used to decide which tests, vaccines or medicines \
                 may help you.",
            )
            .with_terms([term("confidential", "Kept private between you and your care team")]),
            LevelContent::new(
                3,
                "The CDC five Ps structure a non-judgmental, inclusive sexual history.",
                "**Partners:** number and gender of partners. **Practices:** types of sex \
                 (vaginal, anal, oral) to guide site-specific testing. **Protection from STIs:** \
                 condoms, PrEP, vaccination. **Past history of STIs.** **Pregnancy intention** \
                 and contraception. Add a sixth P for **plus**: pleasure, problems, pride.",
            )
            .with_terms([term("five Ps", "Partners, practices, protection, past history and pregnancy intention")])
            .with_examples([
                "\"Do you have sex with men, women or both?\"",
                "\"What are you doing to protect yourself from STIs and HIV?\"",
            ])
            .with_clinical_notes("Ask with gender-neutral language and without assumptions about orientation."),
        ]),
        citations: vec![cdc_sti_2021()],
        cross_references: vec![
            cross_ref("sti-overview", ContentType::Topic, Relationship::Sibling, "STI Overview"),
            cross_ref("hiv-prep", ContentType::Topic, Relationship::SeeAlso, "HIV PrEP"),
            cross_ref("msm-sexual-health", ContentType::Topic, Relationship::SeeAlso, "MSM Sexual Health"),
            cross_ref("transgender-sexual-health", ContentType::Topic, Relationship::SeeAlso, "Transgender Sexual Health"),
            cross_ref("history-oldcarts", ContentType::Topic, Relationship::Related, "OLDCARTS History"),
        ],
        tags: tags(
            &["reproductive"],
            &["sexual-health", "communication"],
            &["sexual history", "five Ps", "counseling"],
            ClinicalRelevance::Moderate,
        ),
        ..published("sexual-history", ContentType::Topic, "Taking a Sexual History", authored(2026, 2, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexual_health::get_entry_by_id;

    #[test]
    fn test_overview_children_exist_in_database() {
        let overview = sti_overview();
        for xref in overview
            .cross_references
            .iter()
            .filter(|x| x.relationship == Relationship::Child)
        {
            assert!(get_entry_by_id(&xref.target_id).is_some(), "{}", xref.target_id);
        }
    }
}
