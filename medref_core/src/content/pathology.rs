//! Cardiopulmonary pathology modules.

use super::{case, citation, exam, media, names, published, tags};
use crate::registry::{ModuleDef, ModuleFamily};
use crate::types::*;

pub const FAMILY: ModuleFamily = ModuleFamily {
    name: "pathology",
    modules: &[
        ModuleDef { slug: "coronary-artery-disease", build: coronary_artery_disease },
        ModuleDef { slug: "heart-failure", build: heart_failure },
        ModuleDef { slug: "copd", build: copd },
    ],
};

fn statpearls(id: &str, title: &str, authors: &[&str]) -> Citation {
    Citation {
        url: Some("https://www.ncbi.nlm.nih.gov/books/NBK430685/".into()),
        license: Some("CC BY-NC-ND 4.0".into()),
        ..citation(id, CitationType::Review, title, authors, "StatPearls")
    }
}

pub fn coronary_artery_disease() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["CAD", "Ischemic Heart Disease", "Atherosclerotic Heart Disease"]),
        levels: levels([
            LevelContent::new(
                1,
                "Plaque narrows the arteries that feed the heart muscle, causing chest pain or a heart attack.",
                "Cholesterol and other substances build up in the walls of the coronary arteries. \
                 When the heart does not get enough oxygen-rich blood you may feel chest pain \
                 (**angina**). If a clot blocks the artery completely, part of the heart muscle \
                 dies: a **heart attack**.",
            )
            .with_terms([
                term("angina", "Chest pain or pressure caused by reduced blood flow to the heart"),
                term("plaque", "A fatty buildup inside an artery wall"),
            ])
            .with_analogies(["Plaque in an artery is like rust narrowing the inside of a water pipe."])
            .with_counseling([
                "Chest pain with sweating, nausea or shortness of breath is an emergency; call for help.",
                "Stopping smoking lowers risk within the first year.",
            ]),
            LevelContent::new(
                3,
                "Atherosclerosis of the epicardial coronaries produces stable angina or, with plaque rupture and thrombosis, an acute coronary syndrome.",
                "**Plaque biology:** endothelial dysfunction, subendothelial LDL oxidation, \
                 monocyte recruitment and foam cells, smooth muscle migration forming a fibrous \
                 cap. **Stable angina:** predictable exertional pain, usually > 70% stenosis. \
                 **ACS:** unstable angina (no troponin rise), NSTEMI (troponin rise), STEMI \
                 (complete occlusion, ST elevation). **Treatment:** antiplatelets, high-intensity \
                 statin, beta-blocker, nitrates, ACE inhibitor when indicated, revascularization \
                 by PCI or CABG.",
            )
            .with_terms([
                term("STEMI", "ST-elevation myocardial infarction from complete coronary occlusion"),
                term("troponin", "Cardiac protein released with myocardial necrosis"),
                term("foam cell", "Lipid-laden macrophage in an atherosclerotic plaque"),
            ])
            .with_case(case(
                "Exertional chest pressure",
                "A 62-year-old smoker with diabetes has chest pressure walking uphill that resolves with rest. ECG at rest is normal.",
                "Estimate pre-test probability and order stress imaging or coronary CT angiography; start aspirin and a statin.",
                "Reassuring the patient because the resting ECG is normal.",
            )),
            LevelContent::new(
                5,
                "Vulnerable thin-cap fibroatheromas drive most acute events; functional assessment (FFR/iFR) guides revascularization.",
                "**Vulnerable plaque:** necrotic core > 40% of volume, fibrous cap < 65 um, \
                 macrophage infiltration, expansive remodeling. **ACS mechanisms:** rupture \
                 (65-70%), erosion (30-35%, more common in women and smokers), calcified nodule. \
                 **Invasive physiology:** FFR <= 0.80 or iFR <= 0.89 indicates ischemia; \
                 FFR-guided PCI improves outcomes over angiography alone. **CABG** is favored for \
                 left main disease, three-vessel disease and diabetes with multivessel disease.",
            )
            .with_terms([
                term("FFR", "Fractional flow reserve, hyperemic distal-to-aortic pressure ratio"),
                term("thin-cap fibroatheroma", "Plaque with a cap under 65 um, prone to rupture"),
            ])
            .with_clinical_notes("Door-to-balloon time for STEMI should be under 90 minutes."),
        ]),
        media: vec![media(
            "cad-plaque-progression",
            MediaType::Diagram,
            "cad-plaque-progression.svg",
            "Plaque Progression",
            "Stages from fatty streak to ruptured fibroatheroma with thrombus",
        )],
        citations: vec![statpearls(
            "statpearls-cad",
            "Coronary Artery Disease",
            &["Shahjehan RD", "Bhutta BS"],
        )],
        cross_references: vec![
            cross_ref("heart-failure", ContentType::Condition, Relationship::Related, "Heart Failure"),
            cross_ref("history-opqrst", ContentType::Topic, Relationship::SeeAlso, "OPQRST Pain History"),
            cross_ref("exam-cardiovascular", ContentType::Topic, Relationship::SeeAlso, "Cardiovascular Exam"),
        ],
        tags: ContentTags {
            exam_relevance: exam(true, true, &["internal-medicine", "emergency-medicine"]),
            ..tags(
                &["cardiovascular"],
                &["pathology", "cardiology"],
                &["atherosclerosis", "angina", "myocardial infarction", "ACS", "troponin"],
                ClinicalRelevance::Critical,
            )
        },
        ..published(
            "coronary-artery-disease",
            ContentType::Condition,
            "Coronary Artery Disease",
            authored(2026, 1, 12),
        )
    }
}

pub fn heart_failure() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["HF", "Congestive Heart Failure", "CHF"]),
        levels: levels([
            LevelContent::new(
                1,
                "The heart cannot pump enough blood to meet the body's needs.",
                "Heart failure does not mean the heart has stopped. It is weaker or stiffer than \
                 normal, so fluid backs up into the lungs and legs, causing breathlessness and \
                 swelling.",
            )
            .with_terms([term("edema", "Swelling caused by fluid in the tissues")])
            .with_counseling([
                "Weigh yourself every morning; a gain of 1 kg in a day or 2 kg in a week needs a call to your care team.",
                "Limit salt to help prevent fluid buildup.",
            ]),
            LevelContent::new(
                3,
                "Classified by ejection fraction (HFrEF, HFmrEF, HFpEF); neurohormonal activation drives progression.",
                "**HFrEF (EF <= 40%):** systolic dysfunction, often after myocardial infarction. \
                 **HFpEF (EF >= 50%):** diastolic dysfunction with hypertension, obesity and \
                 age. **Compensation:** RAAS and sympathetic activation, natriuretic peptide \
                 release. **Diagnosis:** BNP or NT-proBNP, echocardiography. **HFrEF therapy:** \
                 ARNI or ACE inhibitor, evidence-based beta-blocker, MRA and SGLT2 inhibitor; \
                 diuretics for congestion.",
            )
            .with_terms([
                term("ejection fraction", "Percentage of left ventricular volume ejected with each beat"),
                term("BNP", "B-type natriuretic peptide released by stretched ventricles"),
            ]),
            LevelContent::new(
                5,
                "Guideline-directed medical therapy with four drug classes reduces mortality in HFrEF; device therapy follows persistent low EF.",
                "**Staging:** ACC/AHA A-D and NYHA I-IV. **Four pillars:** sacubitril-valsartan, \
                 carvedilol/metoprolol succinate/bisoprolol, spironolactone or eplerenone, \
                 dapagliflozin or empagliflozin, titrated rapidly. **Devices:** ICD for EF <= 35% \
                 despite 3 months of therapy; CRT with LBBB and QRS >= 150 ms. **Acute \
                 decompensation:** classify warm/cold and wet/dry to guide diuresis, vasodilators \
                 or inotropes.",
            )
            .with_terms([
                term("ARNI", "Angiotensin receptor-neprilysin inhibitor"),
                term("CRT", "Cardiac resynchronization therapy"),
            ]),
        ]),
        citations: vec![citation(
            "aha-acc-hfsa-2022",
            CitationType::Guideline,
            "2022 AHA/ACC/HFSA Guideline for the Management of Heart Failure",
            &["Heidenreich PA", "Bozkurt B", "Aguilar D"],
            "Circulation",
        )],
        cross_references: vec![
            cross_ref("coronary-artery-disease", ContentType::Condition, Relationship::Related, "Coronary Artery Disease"),
            cross_ref("copd", ContentType::Condition, Relationship::SeeAlso, "COPD"),
            cross_ref("exam-cardiovascular", ContentType::Topic, Relationship::SeeAlso, "Cardiovascular Exam"),
        ],
        tags: tags(
            &["cardiovascular"],
            &["pathology", "cardiology"],
            &["heart failure", "ejection fraction", "BNP", "GDMT"],
            ClinicalRelevance::Critical,
        ),
        ..published("heart-failure", ContentType::Condition, "Heart Failure", authored(2026, 1, 12))
    }
}

pub fn copd() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Chronic Obstructive Pulmonary Disease", "Emphysema", "Chronic Bronchitis"]),
        levels: levels([
            LevelContent::new(
                1,
                "A long-term lung disease, usually from smoking, that makes it hard to breathe out.",
                "The airways become narrow and the air sacs lose their stretch, so air gets \
                 trapped. People feel short of breath and often cough up mucus.",
            )
            .with_terms([term("emphysema", "Damage to the air sacs of the lungs")])
            .with_counseling(["Quitting smoking is the only step proven to slow the disease."]),
            LevelContent::new(
                3,
                "Persistent airflow limitation (post-bronchodilator FEV1/FVC < 0.70) from chronic inflammation of airways and parenchyma.",
                "**Phenotypes:** emphysema (alveolar wall destruction) and chronic bronchitis \
                 (productive cough 3 months a year for 2 years). **Causes:** tobacco smoke, \
                 biomass exposure, alpha-1 antitrypsin deficiency. **Treatment:** LAMA and LABA \
                 bronchodilators, inhaled corticosteroid when eosinophils are high, pulmonary \
                 rehabilitation, vaccination, oxygen when resting SpO2 <= 88%.",
            )
            .with_terms([
                term("FEV1/FVC", "Ratio of forced expiratory volume in one second to forced vital capacity"),
                term("alpha-1 antitrypsin", "Protease inhibitor whose deficiency causes early panlobular emphysema"),
            ]),
            LevelContent::new(
                5,
                "GOLD groups A, B and E direct initial pharmacotherapy; exacerbations are treated with bronchodilators, steroids and antibiotics.",
                "**Exacerbation:** short-acting bronchodilators, prednisone 40 mg for 5 days, \
                 antibiotics with increased sputum purulence, controlled oxygen targeting 88-92% \
                 and NIV for hypercapnic acidosis. **Long-term oxygen** improves survival with \
                 PaO2 <= 55 mmHg. **Complications:** cor pulmonale, secondary polycythemia, \
                 pneumothorax.",
            )
            .with_terms([term("cor pulmonale", "Right heart failure secondary to lung disease")])
            .with_clinical_notes("Avoid high-flow oxygen in chronic hypercapnia."),
        ]),
        citations: vec![citation(
            "gold-2024",
            CitationType::Guideline,
            "Global Strategy for the Diagnosis, Management and Prevention of COPD, 2024 Report",
            &["Global Initiative for Chronic Obstructive Lung Disease"],
            "GOLD",
        )],
        cross_references: vec![cross_ref("heart-failure", ContentType::Condition, Relationship::Related, "Heart Failure (cor pulmonale)")],
        tags: tags(
            &["respiratory"],
            &["pathology", "pulmonology"],
            &["COPD", "emphysema", "spirometry", "GOLD"],
            ClinicalRelevance::High,
        ),
        ..published("copd", ContentType::Condition, "Chronic Obstructive Pulmonary Disease", authored(2026, 1, 12))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pathology_modules_cover_levels_1_3_5() {
        for def in FAMILY.modules {
            let content = (def.build)();
            assert_eq!(content.level_numbers(), vec![1, 3, 5], "{}", content.id);
        }
    }

    #[test]
    fn test_cad_media_and_citation() {
        let cad = coronary_artery_disease();
        assert_eq!(cad.media.len(), 1);
        assert_eq!(cad.media[0].media_type, MediaType::Diagram);
        assert!(cad.citations[0].license.is_some());
    }
}
