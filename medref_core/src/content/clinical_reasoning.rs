//! Clinical-reasoning modules: history-taking frameworks and focused exams.

use super::{names, published, tags};
use crate::registry::{ModuleDef, ModuleFamily};
use crate::types::*;

pub const FAMILY: ModuleFamily = ModuleFamily {
    name: "clinical-reasoning",
    modules: &[
        ModuleDef { slug: "history-oldcarts", build: history_oldcarts },
        ModuleDef { slug: "history-opqrst", build: history_opqrst },
        ModuleDef { slug: "exam-cardiovascular", build: exam_cardiovascular },
        ModuleDef { slug: "exam-abdominal", build: exam_abdominal },
    ],
};

fn bates() -> Citation {
    super::citation(
        "bates-13e",
        CitationType::Textbook,
        "Bates' Guide to Physical Examination and History Taking, 13th Edition",
        &["Bickley LS", "Szilagyi PG", "Hoffman RM"],
        "Wolters Kluwer",
    )
}

// ============================================================================
// History Taking
// ============================================================================

pub fn history_oldcarts() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["HPI Framework", "OLDCARTS"]),
        levels: levels([
            LevelContent::new(
                1,
                "Eight questions that help you describe any symptom clearly.",
                "Onset, Location, Duration, Character, Aggravating factors, Relieving factors, \
                 Timing and Severity. Answering each one gives your doctor the clues needed to \
                 work out what is wrong.",
            )
            .with_terms([term("OLDCARTS", "Onset, Location, Duration, Character, Aggravating, Relieving, Timing, Severity")])
            .with_analogies(["OLDCARTS is like a detective's report: every answer is a clue."]),
            LevelContent::new(
                3,
                "A structured mnemonic for characterizing any chief complaint in the history of present illness.",
                "Ask about the first and the most recent episode separately; chronic \
                 conditions evolve. **Red flags:** sudden worst-ever onset, rapidly progressive \
                 severity, associated syncope, instability or neurological deficit.",
            )
            .with_terms([term("HPI", "History of present illness")])
            .with_examples([
                "Onset: \"When did this start? What were you doing?\"",
                "Severity: \"On a 0-10 scale, how bad is it now and at its worst?\"",
            ])
            .with_clinical_notes(
                "Document each element explicitly and record pertinent negatives (\"no radiation, no diaphoresis\").",
            ),
        ]),
        citations: vec![bates()],
        cross_references: vec![
            cross_ref("history-opqrst", ContentType::Topic, Relationship::Sibling, "OPQRST"),
            cross_ref("coronary-artery-disease", ContentType::Condition, Relationship::SeeAlso, "Chest Pain: Coronary Artery Disease"),
        ],
        tags: tags(
            &["general"],
            &["clinical-reasoning", "history-taking"],
            &["OLDCARTS", "HPI", "chief complaint"],
            ClinicalRelevance::High,
        ),
        ..published("history-oldcarts", ContentType::Topic, "OLDCARTS History Framework", authored(2026, 2, 10))
    }
}

pub fn history_opqrst() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["OPQRST", "Pain History"]),
        levels: levels([
            LevelContent::new(
                1,
                "A quick set of questions for describing pain, used in emergencies.",
                "Onset, Provocation, Quality, Region, Severity and Time. Paramedics and \
                 emergency teams use it to understand pain fast.",
            )
            .with_terms([term("OPQRST", "Onset, Provocation/Palliation, Quality, Region/Radiation, Severity, Time")]),
            LevelContent::new(
                3,
                "Prehospital and emergency mnemonic that emphasizes provocation and palliation for early triage.",
                "Lead with time of onset and acuity. Quantify severity on a validated scale so \
                 serial assessments are comparable. **Red flags:** 10/10 pain of acute onset, \
                 pain unresponsive to any measure, radiation suggesting a vascular emergency \
                 (tearing to the back, jaw or left arm).",
            )
            .with_terms([term("radiation", "Spread of pain from its origin to another region")]),
        ]),
        citations: vec![bates()],
        cross_references: vec![
            cross_ref("history-oldcarts", ContentType::Topic, Relationship::Sibling, "OLDCARTS"),
            cross_ref("coronary-artery-disease", ContentType::Condition, Relationship::Related, "Coronary Artery Disease"),
        ],
        tags: tags(
            &["general"],
            &["clinical-reasoning", "history-taking", "emergency"],
            &["OPQRST", "pain", "triage"],
            ClinicalRelevance::High,
        ),
        ..published("history-opqrst", ContentType::Topic, "OPQRST Pain History", authored(2026, 2, 10))
    }
}

// ============================================================================
// Physical Examination
// ============================================================================

pub fn exam_cardiovascular() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Cardiac Exam", "Precordial Exam"]),
        levels: levels([
            LevelContent::new(
                1,
                "The doctor listens to your heart and checks your pulses and neck veins.",
                "With a stethoscope the doctor listens in four main spots on the chest. They \
                 also feel pulses in your wrists and feet and look for swelling in your legs.",
            )
            .with_terms([term("murmur", "An extra whooshing sound made by turbulent blood flow")]),
            LevelContent::new(
                3,
                "Inspection, palpation and auscultation of the precordium with JVP, peripheral pulses and edema assessment.",
                "**Auscultation areas:** aortic (right 2nd ICS), pulmonic (left 2nd ICS), \
                 tricuspid (left lower sternal border), mitral (apex). **JVP** at 45 degrees, \
                 elevated above 8 cm H2O in volume overload. **PMI** displaced laterally in \
                 ventricular dilation. **S3** suggests volume overload; **S4** a stiff ventricle.",
            )
            .with_terms([
                term("JVP", "Jugular venous pressure, a bedside estimate of right atrial pressure"),
                term("PMI", "Point of maximal impulse of the cardiac apex"),
                term("S3", "Early diastolic filling sound heard in heart failure"),
            ]),
        ]),
        citations: vec![bates()],
        cross_references: vec![
            cross_ref("heart-failure", ContentType::Condition, Relationship::Related, "Heart Failure"),
            cross_ref("exam-abdominal", ContentType::Topic, Relationship::Sibling, "Abdominal Exam"),
        ],
        tags: tags(
            &["cardiovascular"],
            &["clinical-reasoning", "physical-exam"],
            &["auscultation", "JVP", "murmur", "S3"],
            ClinicalRelevance::High,
        ),
        ..published("exam-cardiovascular", ContentType::Topic, "Cardiovascular Examination", authored(2026, 2, 10))
    }
}

pub fn exam_abdominal() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Abdominal Exam"]),
        levels: levels([
            LevelContent::new(
                1,
                "The doctor looks at, listens to and gently presses on your belly.",
                "Pressing on different areas helps find where pain comes from and whether any \
                 organ is enlarged.",
            )
            .with_terms([term("tenderness", "Pain when an area is pressed")]),
            LevelContent::new(
                3,
                "Inspection, auscultation, percussion and palpation, in that order, with targeted maneuvers for peritonitis and appendicitis.",
                "Auscultate before palpation. Palpate the painful quadrant last. **Peritoneal \
                 signs:** guarding, rigidity, rebound tenderness. **Maneuvers:** Murphy sign \
                 (cholecystitis), McBurney point tenderness, psoas and obturator signs \
                 (appendicitis). In women with lower abdominal pain consider a pelvic exam for \
                 PID or ectopic pregnancy.",
            )
            .with_terms([
                term("rebound tenderness", "Pain on sudden release of pressure, suggesting peritonitis"),
                term("Murphy sign", "Inspiratory arrest on right upper quadrant palpation"),
            ]),
        ]),
        citations: vec![bates()],
        cross_references: vec![
            cross_ref("exam-cardiovascular", ContentType::Topic, Relationship::Sibling, "Cardiovascular Exam"),
            cross_ref("ectopic-pregnancy", ContentType::Condition, Relationship::SeeAlso, "Ectopic Pregnancy"),
            cross_ref("pelvic-inflammatory-disease", ContentType::Condition, Relationship::SeeAlso, "Pelvic Inflammatory Disease"),
        ],
        tags: tags(
            &["gastrointestinal"],
            &["clinical-reasoning", "physical-exam"],
            &["palpation", "peritonitis", "Murphy sign", "McBurney"],
            ClinicalRelevance::High,
        ),
        ..published("exam-abdominal", ContentType::Topic, "Abdominal Examination", authored(2026, 2, 10))
    }
}
