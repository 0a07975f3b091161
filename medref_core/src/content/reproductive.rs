//! Reproductive system modules: anatomy, physiology, gynecology, obstetrics
//! and male reproductive conditions.

use super::{case, citation, exam, names, published, tags};
use crate::registry::{ModuleDef, ModuleFamily};
use crate::types::*;

pub const FAMILY: ModuleFamily = ModuleFamily {
    name: "reproductive",
    modules: &[
        ModuleDef { slug: "female-reproductive-anatomy", build: female_reproductive_anatomy },
        ModuleDef { slug: "male-reproductive-anatomy", build: male_reproductive_anatomy },
        ModuleDef { slug: "menstrual-cycle", build: menstrual_cycle },
        ModuleDef { slug: "puberty", build: puberty },
        ModuleDef { slug: "menopause", build: menopause },
        ModuleDef { slug: "polycystic-ovary-syndrome", build: polycystic_ovary_syndrome },
        ModuleDef { slug: "endometriosis", build: endometriosis },
        ModuleDef { slug: "uterine-fibroids", build: uterine_fibroids },
        ModuleDef { slug: "ovarian-cancer", build: ovarian_cancer },
        ModuleDef { slug: "cervical-cancer", build: cervical_cancer },
        ModuleDef { slug: "endometrial-cancer", build: endometrial_cancer },
        ModuleDef { slug: "breast-cancer", build: breast_cancer },
        ModuleDef { slug: "ectopic-pregnancy", build: ectopic_pregnancy },
        ModuleDef { slug: "contraception", build: contraception },
        ModuleDef { slug: "infertility", build: infertility },
        ModuleDef { slug: "prenatal-care", build: prenatal_care },
        ModuleDef { slug: "preeclampsia", build: preeclampsia },
        ModuleDef { slug: "gestational-diabetes", build: gestational_diabetes },
        ModuleDef { slug: "postpartum-hemorrhage", build: postpartum_hemorrhage },
        ModuleDef { slug: "benign-prostatic-hyperplasia", build: benign_prostatic_hyperplasia },
        ModuleDef { slug: "prostate-cancer", build: prostate_cancer },
        ModuleDef { slug: "testicular-cancer", build: testicular_cancer },
        ModuleDef { slug: "testicular-torsion", build: testicular_torsion },
    ],
};

/// Shared metadata for every module in this family
fn reproductive(id: &str, content_type: ContentType, name: &str) -> EducationalContent {
    published(id, content_type, name, authored(2026, 1, 30))
}

fn openstax_ch27() -> Citation {
    Citation {
        url: Some("https://openstax.org/books/anatomy-and-physiology-2e/pages/27-introduction".into()),
        license: Some("CC BY 4.0".into()),
        ..citation(
            "openstax-ap-27",
            CitationType::Textbook,
            "Anatomy and Physiology 2e, Chapter 27: The Reproductive System",
            &["Betts JG", "Young KA", "Wise JA"],
            "OpenStax",
        )
    }
}

// ============================================================================
// Anatomy and Physiology
// ============================================================================

pub fn female_reproductive_anatomy() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Female Genital Tract"]),
        name_es: Some("Anatomía Reproductiva Femenina".into()),
        levels: levels([
            LevelContent::new(
                1,
                "The female reproductive organs make eggs, receive sperm and can carry a baby.",
                "The **ovaries** make eggs and hormones. Each month an egg travels through a \
                 **fallopian tube** toward the **uterus**, a muscular organ where a baby can grow. \
                 The **cervix** is the lower opening of the uterus into the **vagina**.",
            )
            .with_terms([
                term("ovary", "An almond-sized organ that stores eggs and makes estrogen and progesterone"),
                term("uterus", "The hollow, muscular organ where a pregnancy develops"),
            ])
            .with_analogies(["The fallopian tube is like a hallway between the ovary and the uterus."]),
            LevelContent::new(
                3,
                "Ovaries, uterine tubes, uterus, cervix and vagina form a continuous tract regulated by the hypothalamic-pituitary-ovarian axis.",
                "**Ovary:** cortex with follicles at all stages, medulla with vessels. \
                 **Uterine tube:** interstitial, isthmus, ampulla (usual site of fertilization) and \
                 infundibulum with fimbriae. **Uterus:** perimetrium, myometrium and an endometrium \
                 with a functional layer shed at menses. **Vagina:** non-keratinized stratified \
                 squamous epithelium kept at pH 3.8-4.5 by lactobacilli.\n\n\
                 **Surgical landmark:** the uterine artery crosses over the ureter about 2 cm lateral \
                 to the cervix.",
            )
            .with_terms([
                term("ampulla", "Widest segment of the uterine tube and the usual site of fertilization"),
                term("endometrium", "Uterine mucosa with a cyclically shed functional layer and a permanent basal layer"),
                term("fimbriae", "Finger-like projections of the infundibulum that sweep the ovulated oocyte into the tube"),
            ]),
        ]),
        citations: vec![openstax_ch27()],
        cross_references: vec![
            cross_ref("male-reproductive-anatomy", ContentType::Structure, Relationship::Sibling, "Male Reproductive Anatomy"),
            cross_ref("menstrual-cycle", ContentType::Process, Relationship::Related, "Menstrual Cycle"),
        ],
        tags: tags(
            &["reproductive"],
            &["anatomy", "gynecology"],
            &["ovary", "uterus", "fallopian tube", "cervix", "vagina"],
            ClinicalRelevance::High,
        ),
        ..reproductive("female-reproductive-anatomy", ContentType::Structure, "Female Reproductive Anatomy")
    }
}

pub fn male_reproductive_anatomy() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Male Genital Tract"]),
        name_es: Some("Anatomía Reproductiva Masculina".into()),
        levels: levels([
            LevelContent::new(
                1,
                "The male reproductive organs make sperm and testosterone and deliver sperm.",
                "The **testes** sit in the scrotum, a little cooler than the body, where sperm \
                 develop best. Sperm mature in the **epididymis**, travel through the **vas \
                 deferens**, and mix with fluid from the **prostate** and **seminal vesicles** to \
                 form semen.",
            )
            .with_terms([
                term("testis", "Organ in the scrotum that makes sperm and testosterone"),
                term("prostate", "Walnut-sized gland below the bladder that adds fluid to semen"),
            ]),
            LevelContent::new(
                3,
                "Seminiferous tubules produce sperm supported by Sertoli cells; Leydig cells produce testosterone under LH control.",
                "**Testis:** seminiferous tubules (spermatogenesis), Sertoli cells forming the \
                 blood-testis barrier and secreting inhibin, interstitial Leydig cells. \
                 **Excurrent ducts:** efferent ductules, epididymis (10-14 day maturation), ductus \
                 deferens, ejaculatory duct. **Prostate zones:** peripheral (most carcinomas), \
                 central, transitional (site of benign hyperplasia).\n\n\
                 **Erection:** parasympathetic NO release raises cGMP and relaxes cavernosal smooth \
                 muscle; PDE5 degrades cGMP.",
            )
            .with_terms([
                term("Sertoli cell", "Supporting cell of the seminiferous tubule that forms the blood-testis barrier"),
                term("Leydig cell", "Interstitial cell that secretes testosterone in response to LH"),
                term("transitional zone", "Periurethral prostate zone where benign prostatic hyperplasia arises"),
            ]),
        ]),
        citations: vec![openstax_ch27()],
        cross_references: vec![
            cross_ref("female-reproductive-anatomy", ContentType::Structure, Relationship::Sibling, "Female Reproductive Anatomy"),
            cross_ref("benign-prostatic-hyperplasia", ContentType::Condition, Relationship::Related, "Benign Prostatic Hyperplasia"),
            cross_ref("erectile-dysfunction", ContentType::Condition, Relationship::SeeAlso, "Erectile Dysfunction"),
        ],
        tags: tags(
            &["reproductive"],
            &["anatomy", "urology"],
            &["testis", "epididymis", "prostate", "spermatogenesis"],
            ClinicalRelevance::High,
        ),
        ..reproductive("male-reproductive-anatomy", ContentType::Structure, "Male Reproductive Anatomy")
    }
}

pub fn menstrual_cycle() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Ovarian Cycle", "Uterine Cycle"]),
        name_es: Some("Ciclo Menstrual".into()),
        levels: levels([
            LevelContent::new(
                1,
                "A roughly monthly cycle in which the body prepares for a possible pregnancy.",
                "Hormones cause an egg to ripen and be released (**ovulation**) around the middle \
                 of the cycle. The lining of the uterus thickens. If no pregnancy happens, the \
                 lining is shed as a **period**.",
            )
            .with_terms([
                term("ovulation", "Release of an egg from the ovary"),
                term("period", "Monthly shedding of the uterine lining"),
            ])
            .with_counseling(["Cycles between 21 and 35 days are usually normal."]),
            LevelContent::new(
                2,
                "The follicular phase, ovulation and the luteal phase are driven by FSH, LH, estrogen and progesterone.",
                "**Follicular phase:** FSH recruits follicles; the dominant follicle secretes \
                 estrogen, rebuilding the endometrium. **Ovulation:** rising estrogen switches to \
                 positive feedback and triggers the LH surge. **Luteal phase:** the corpus luteum \
                 secretes progesterone for about 14 days; without hCG it regresses and menses \
                 begins.",
            )
            .with_terms([
                term("LH surge", "Sharp rise in luteinizing hormone that triggers ovulation 24-36 hours later"),
                term("corpus luteum", "Progesterone-secreting remnant of the ruptured follicle"),
            ]),
            LevelContent::new(
                4,
                "Cycle disorders are classified with the FIGO PALM-COEIN system and evaluated by phase-specific hormone testing.",
                "**Abnormal uterine bleeding:** structural causes (polyp, adenomyosis, leiomyoma, \
                 malignancy) versus non-structural causes (coagulopathy, ovulatory dysfunction, \
                 endometrial, iatrogenic, not yet classified). Day-21 progesterone above 3 ng/mL \
                 supports ovulation in a 28-day cycle.",
            )
            .with_terms([term("PALM-COEIN", "FIGO classification of causes of abnormal uterine bleeding")])
            .with_clinical_notes("Always exclude pregnancy before evaluating abnormal bleeding."),
        ]),
        citations: vec![openstax_ch27()],
        cross_references: vec![
            cross_ref("polycystic-ovary-syndrome", ContentType::Condition, Relationship::Related, "PCOS"),
            cross_ref("menopause", ContentType::Process, Relationship::Related, "Menopause"),
        ],
        tags: tags(
            &["reproductive", "endocrine"],
            &["physiology", "gynecology"],
            &["menstruation", "ovulation", "FSH", "LH", "progesterone"],
            ClinicalRelevance::High,
        ),
        ..reproductive("menstrual-cycle", ContentType::Process, "Menstrual Cycle")
    }
}

pub fn puberty() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Sexual Maturation"]),
        name_es: Some("Pubertad".into()),
        levels: levels([
            LevelContent::new(
                1,
                "The time when a child's body matures and becomes able to reproduce.",
                "Puberty usually starts between ages 8 and 13 in girls and 9 and 14 in boys. \
                 Breasts or testicles grow first, followed by body hair, a growth spurt and, in \
                 girls, the first period.",
            )
            .with_terms([term("menarche", "A girl's first menstrual period")]),
            LevelContent::new(
                3,
                "Pulsatile GnRH reactivation drives gonadarche; Tanner staging tracks the sequence of secondary sexual characteristics.",
                "**Sequence (girls):** thelarche, pubarche, growth spurt, menarche about 2-3 years \
                 after thelarche. **Sequence (boys):** testicular enlargement (>= 4 mL), pubarche, \
                 peak height velocity late. **Precocious puberty:** onset before 8 (girls) or 9 \
                 (boys); **delayed puberty:** no development by 13 (girls) or 14 (boys).",
            )
            .with_terms([
                term("thelarche", "Onset of breast development"),
                term("Tanner stage", "Five-stage scale of breast, genital and pubic hair development"),
            ]),
        ]),
        citations: vec![openstax_ch27()],
        cross_references: vec![cross_ref("menstrual-cycle", ContentType::Process, Relationship::Related, "Menstrual Cycle")],
        tags: tags(
            &["reproductive", "endocrine"],
            &["pediatrics", "development"],
            &["Tanner", "menarche", "GnRH"],
            ClinicalRelevance::Moderate,
        ),
        ..reproductive("puberty", ContentType::Process, "Puberty")
    }
}

pub fn menopause() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Climacteric"]),
        name_es: Some("Menopausia".into()),
        levels: levels([
            LevelContent::new(
                1,
                "Menopause is when periods stop for good, usually around age 51.",
                "As the ovaries run out of eggs, estrogen falls. Hot flashes, trouble sleeping and \
                 vaginal dryness are common. Menopause is confirmed after 12 months without a \
                 period.",
            )
            .with_terms([term("hot flash", "A sudden feeling of heat in the face and chest caused by falling estrogen")])
            .with_counseling(["Bleeding after menopause should always be checked by a clinician."]),
            LevelContent::new(
                3,
                "Follicular depletion ends ovarian estrogen production; FSH rises and vasomotor, genitourinary and skeletal effects follow.",
                "**Diagnosis:** clinical in women over 45 with 12 months of amenorrhea. \
                 **Management:** menopausal hormone therapy for vasomotor symptoms in women under \
                 60 or within 10 years of menopause (add a progestogen if a uterus is present); \
                 vaginal estrogen for genitourinary syndrome; bone density screening.",
            )
            .with_terms([
                term("genitourinary syndrome of menopause", "Vulvovaginal atrophy with urinary symptoms caused by estrogen loss"),
                term("MHT", "Menopausal hormone therapy"),
            ]),
        ]),
        citations: vec![citation(
            "nams-2022-ht",
            CitationType::Guideline,
            "The 2022 Hormone Therapy Position Statement",
            &["The North American Menopause Society"],
            "Menopause",
        )],
        cross_references: vec![
            cross_ref("menstrual-cycle", ContentType::Process, Relationship::Related, "Menstrual Cycle"),
            cross_ref("endometrial-cancer", ContentType::Condition, Relationship::SeeAlso, "Endometrial Cancer"),
            cross_ref("female-sexual-dysfunction", ContentType::Condition, Relationship::SeeAlso, "Female Sexual Dysfunction"),
        ],
        tags: tags(
            &["reproductive", "endocrine"],
            &["gynecology", "womens-health"],
            &["menopause", "hot flashes", "hormone therapy", "FSH"],
            ClinicalRelevance::High,
        ),
        ..reproductive("menopause", ContentType::Process, "Menopause")
    }
}

// ============================================================================
// Gynecologic Conditions
// ============================================================================

pub fn polycystic_ovary_syndrome() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["PCOS", "Stein-Leventhal Syndrome"]),
        name_es: Some("Síndrome de Ovario Poliquístico".into()),
        levels: levels([
            LevelContent::new(
                1,
                "A common hormone condition that causes irregular periods, extra hair growth and trouble getting pregnant.",
                "In PCOS the ovaries make more male-type hormones than usual, so eggs are not \
                 released regularly. Many people with PCOS also have insulin resistance.",
            )
            .with_terms([term("insulin resistance", "When the body needs more insulin than usual to keep blood sugar normal")])
            .with_counseling(["Even modest weight loss can restore regular cycles."]),
            LevelContent::new(
                3,
                "Diagnosed by two of three Rotterdam criteria after excluding mimics; associated with metabolic syndrome and endometrial hyperplasia.",
                "**Rotterdam criteria:** oligo- or anovulation, clinical or biochemical \
                 hyperandrogenism, polycystic ovarian morphology. **Exclude:** thyroid disease, \
                 hyperprolactinemia, non-classic congenital adrenal hyperplasia. **Management:** \
                 combined hormonal contraception for cycles and hirsutism, metformin for metabolic \
                 features, letrozole for ovulation induction.",
            )
            .with_terms([
                term("Rotterdam criteria", "Diagnostic criteria for PCOS requiring two of three features"),
                term("hyperandrogenism", "Excess androgen effect such as hirsutism, acne or elevated testosterone"),
            ])
            .with_case(case(
                "Irregular cycles and hirsutism",
                "A 24-year-old has 5 periods a year, acne and coarse chin hair. Pregnancy test is negative.",
                "Check TSH, prolactin and 17-hydroxyprogesterone, then confirm PCOS with Rotterdam criteria.",
                "Diagnosing PCOS from ultrasound alone without excluding other causes of anovulation.",
            )),
        ]),
        citations: vec![citation(
            "pcos-guideline-2023",
            CitationType::Guideline,
            "International Evidence-based Guideline for the Assessment and Management of PCOS 2023",
            &["Teede HJ", "Tay CT", "Laven JSE"],
            "Monash University",
        )],
        cross_references: vec![
            cross_ref("menstrual-cycle", ContentType::Process, Relationship::Related, "Menstrual Cycle"),
            cross_ref("infertility", ContentType::Topic, Relationship::Related, "Infertility"),
            cross_ref("female-infertility-workup", ContentType::Topic, Relationship::SeeAlso, "Female Infertility Workup"),
        ],
        tags: ContentTags {
            exam_relevance: exam(true, true, &["obgyn"]),
            ..tags(
                &["reproductive", "endocrine"],
                &["gynecology"],
                &["PCOS", "anovulation", "hirsutism", "Rotterdam"],
                ClinicalRelevance::High,
            )
        },
        ..reproductive("polycystic-ovary-syndrome", ContentType::Condition, "Polycystic Ovary Syndrome")
    }
}

pub fn endometriosis() -> EducationalContent {
    EducationalContent {
        name_es: Some("Endometriosis".into()),
        levels: levels([
            LevelContent::new(
                1,
                "Tissue like the lining of the uterus grows outside the uterus and causes painful periods.",
                "This tissue bleeds with each cycle but has nowhere to go, causing pain, \
                 scarring and sometimes trouble getting pregnant.",
            )
            .with_terms([term("dysmenorrhea", "Painful menstrual periods")]),
            LevelContent::new(
                3,
                "Estrogen-dependent ectopic endometrial tissue causing dysmenorrhea, dyspareunia and infertility; laparoscopy is definitive.",
                "**Theories:** retrograde menstruation, coelomic metaplasia, lymphatic spread. \
                 **Findings:** fixed retroverted uterus, uterosacral nodularity, ovarian \
                 endometriomas (\"chocolate cysts\"). **Treatment:** NSAIDs and hormonal suppression \
                 first; GnRH antagonists; laparoscopic excision for refractory disease or \
                 infertility.",
            )
            .with_terms([
                term("endometrioma", "Ovarian cyst filled with old blood from endometriosis"),
                term("dyspareunia", "Pain with intercourse"),
            ]),
        ]),
        citations: vec![citation(
            "eshre-endo-2022",
            CitationType::Guideline,
            "ESHRE Guideline: Endometriosis",
            &["Becker CM", "Bokor A", "Heikinheimo O"],
            "Human Reproduction Open",
        )],
        cross_references: vec![
            cross_ref("infertility", ContentType::Topic, Relationship::Related, "Infertility"),
            cross_ref("uterine-fibroids", ContentType::Condition, Relationship::Sibling, "Uterine Fibroids"),
        ],
        tags: tags(
            &["reproductive"],
            &["gynecology", "pelvic-pain"],
            &["endometriosis", "dysmenorrhea", "endometrioma", "laparoscopy"],
            ClinicalRelevance::High,
        ),
        ..reproductive("endometriosis", ContentType::Condition, "Endometriosis")
    }
}

pub fn uterine_fibroids() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Leiomyoma", "Myoma"]),
        name_es: Some("Miomas Uterinos".into()),
        levels: levels([
            LevelContent::new(
                1,
                "Non-cancerous muscle growths in the uterus that can cause heavy periods.",
                "Fibroids are very common and often cause no symptoms. Large ones can cause \
                 heavy bleeding, pelvic pressure or frequent urination.",
            )
            .with_terms([term("fibroid", "A benign growth of the uterine muscle")]),
            LevelContent::new(
                3,
                "Monoclonal smooth-muscle tumors classified by location (FIGO 0-8); managed by symptoms, size and fertility goals.",
                "**Types:** submucosal (bleeding, infertility), intramural, subserosal (bulk \
                 symptoms). **Evaluation:** pelvic ultrasound, CBC for anemia. **Treatment:** \
                 tranexamic acid or hormonal therapy, GnRH antagonists, uterine artery embolization, \
                 myomectomy or hysterectomy.",
            )
            .with_terms([
                term("leiomyoma", "Benign smooth-muscle tumor of the myometrium"),
                term("myomectomy", "Surgical removal of fibroids preserving the uterus"),
            ]),
        ]),
        citations: vec![openstax_ch27()],
        cross_references: vec![cross_ref("endometriosis", ContentType::Condition, Relationship::Sibling, "Endometriosis")],
        tags: tags(
            &["reproductive"],
            &["gynecology"],
            &["fibroids", "leiomyoma", "menorrhagia"],
            ClinicalRelevance::Moderate,
        ),
        ..reproductive("uterine-fibroids", ContentType::Condition, "Uterine Fibroids")
    }
}

// ============================================================================
// Reproductive Cancers
// ============================================================================

pub fn ovarian_cancer() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Ovarian Carcinoma"]),
        name_es: Some("Cáncer de Ovario".into()),
        levels: levels([
            LevelContent::new(
                1,
                "A cancer of the ovaries that is often found late because early symptoms are vague.",
                "Bloating, feeling full quickly, pelvic pain and needing to urinate often for more \
                 than a few weeks should be checked by a doctor.",
            )
            .with_terms([term("ovary", "Organ that stores eggs and makes female hormones")]),
            LevelContent::new(
                3,
                "Most cases are high-grade serous carcinomas arising from the fallopian tube; BRCA1/2 carriers are at highest risk.",
                "**Risk:** BRCA1/2, Lynch syndrome, nulliparity, endometriosis; oral contraceptive \
                 use is protective. **Evaluation:** transvaginal ultrasound and CA-125 for a pelvic \
                 mass. **Treatment:** surgical staging and cytoreduction plus platinum-taxane \
                 chemotherapy; PARP inhibitors for maintenance.",
            )
            .with_terms([
                term("CA-125", "Tumor marker used to evaluate pelvic masses and monitor treatment"),
                term("PARP inhibitor", "Targeted drug effective in homologous-recombination-deficient tumors"),
            ])
            .with_clinical_notes("No screening test is recommended for average-risk women."),
        ]),
        citations: vec![citation(
            "nccn-ovarian",
            CitationType::Guideline,
            "NCCN Guidelines: Ovarian Cancer",
            &["National Comprehensive Cancer Network"],
            "NCCN",
        )],
        cross_references: vec![
            cross_ref("breast-cancer", ContentType::Condition, Relationship::Related, "Breast Cancer (BRCA)"),
            cross_ref("endometrial-cancer", ContentType::Condition, Relationship::Sibling, "Endometrial Cancer"),
        ],
        tags: tags(
            &["reproductive"],
            &["oncology", "gynecology"],
            &["ovarian cancer", "BRCA", "CA-125"],
            ClinicalRelevance::Critical,
        ),
        ..reproductive("ovarian-cancer", ContentType::Condition, "Ovarian Cancer")
    }
}

pub fn cervical_cancer() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Cervical Carcinoma"]),
        name_es: Some("Cáncer de Cuello Uterino".into()),
        levels: levels([
            LevelContent::new(
                1,
                "A cancer of the cervix that is almost always caused by HPV and is largely preventable.",
                "The HPV vaccine and regular screening tests (Pap and HPV tests) can stop most \
                 cervical cancers before they start.",
            )
            .with_terms([term("Pap test", "Screening test that looks for abnormal cervical cells")])
            .with_counseling(["Keep up with cervical screening even after HPV vaccination."]),
            LevelContent::new(
                3,
                "Persistent high-risk HPV (16, 18) drives CIN progression to squamous cell carcinoma at the transformation zone.",
                "**Pathogenesis:** E6 degrades p53, E7 inactivates Rb. **Screening:** cytology \
                 from 21, primary HPV or co-testing from 30 to 65. **Staging:** FIGO clinical and \
                 imaging staging. **Treatment:** excision for early disease, chemoradiation for \
                 locally advanced disease.",
            )
            .with_terms([
                term("CIN", "Cervical intraepithelial neoplasia, a graded precursor lesion"),
                term("transformation zone", "Area where columnar epithelium becomes squamous; most lesions arise here"),
            ]),
        ]),
        citations: vec![citation(
            "asccp-2019",
            CitationType::Guideline,
            "2019 ASCCP Risk-Based Management Consensus Guidelines",
            &["Perkins RB", "Guido RS", "Castle PE"],
            "J Low Genit Tract Dis",
        )],
        cross_references: vec![
            cross_ref("hpv", ContentType::Condition, Relationship::Parent, "Human Papillomavirus"),
            cross_ref("cervical-cancer-screening", ContentType::Topic, Relationship::SeeAlso, "Cervical Cancer Screening"),
            cross_ref("hpv-vaccine-prevention", ContentType::Topic, Relationship::SeeAlso, "HPV Vaccination"),
        ],
        tags: tags(
            &["reproductive"],
            &["oncology", "gynecology", "screening"],
            &["cervical cancer", "HPV", "Pap", "CIN"],
            ClinicalRelevance::Critical,
        ),
        ..reproductive("cervical-cancer", ContentType::Condition, "Cervical Cancer")
    }
}

pub fn endometrial_cancer() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Uterine Cancer"]),
        name_es: Some("Cáncer de Endometrio".into()),
        levels: levels([
            LevelContent::new(
                1,
                "A cancer of the uterine lining whose main warning sign is bleeding after menopause.",
                "Because it usually causes bleeding early, most endometrial cancers are found at \
                 an early, curable stage.",
            )
            .with_terms([term("postmenopausal bleeding", "Any vaginal bleeding after periods have stopped for a year")]),
            LevelContent::new(
                3,
                "Type I endometrioid tumors follow unopposed estrogen exposure; evaluation of postmenopausal bleeding starts with ultrasound or biopsy.",
                "**Risk factors:** obesity, unopposed estrogen, tamoxifen, PCOS, Lynch syndrome. \
                 **Evaluation:** endometrial thickness > 4 mm on transvaginal ultrasound or \
                 persistent bleeding warrants endometrial biopsy. **Treatment:** total \
                 hysterectomy with bilateral salpingo-oophorectomy and sentinel node mapping.",
            )
            .with_terms([term("unopposed estrogen", "Estrogen exposure without progesterone, driving endometrial hyperplasia")]),
        ]),
        citations: vec![citation(
            "acog-pb-149",
            CitationType::Guideline,
            "ACOG Practice Bulletin 149: Endometrial Cancer",
            &["American College of Obstetricians and Gynecologists"],
            "Obstet Gynecol",
        )],
        cross_references: vec![
            cross_ref("menopause", ContentType::Process, Relationship::Related, "Menopause"),
            cross_ref("polycystic-ovary-syndrome", ContentType::Condition, Relationship::Related, "PCOS"),
        ],
        tags: tags(
            &["reproductive"],
            &["oncology", "gynecology"],
            &["endometrial cancer", "postmenopausal bleeding", "Lynch"],
            ClinicalRelevance::High,
        ),
        ..reproductive("endometrial-cancer", ContentType::Condition, "Endometrial Cancer")
    }
}

pub fn breast_cancer() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Breast Carcinoma"]),
        name_es: Some("Cáncer de Mama".into()),
        levels: levels([
            LevelContent::new(
                1,
                "The most common cancer in women; screening mammograms help find it early.",
                "A new lump, skin dimpling, nipple changes or discharge should be checked. Most \
                 breast lumps are not cancer, but all need evaluation.",
            )
            .with_terms([term("mammogram", "An X-ray of the breast used for screening")]),
            LevelContent::new(
                3,
                "Classified by histology and receptor status (ER, PR, HER2), which directs systemic therapy.",
                "**Screening:** biennial mammography from 40 (USPSTF 2024). **Diagnosis:** \
                 imaging then core needle biopsy. **Subtypes:** luminal A/B (hormone receptor \
                 positive), HER2-enriched, triple negative. **Treatment:** surgery, radiation, \
                 endocrine therapy, anti-HER2 agents, chemotherapy.",
            )
            .with_terms([
                term("HER2", "Growth factor receptor targeted by trastuzumab when overexpressed"),
                term("triple negative", "Tumor lacking ER, PR and HER2 expression"),
            ]),
        ]),
        citations: vec![citation(
            "uspstf-breast-2024",
            CitationType::Guideline,
            "Screening for Breast Cancer: USPSTF Recommendation Statement",
            &["US Preventive Services Task Force"],
            "JAMA",
        )],
        cross_references: vec![cross_ref("ovarian-cancer", ContentType::Condition, Relationship::Related, "Ovarian Cancer (BRCA)")],
        tags: tags(
            &["reproductive"],
            &["oncology", "screening"],
            &["breast cancer", "mammography", "BRCA", "HER2"],
            ClinicalRelevance::Critical,
        ),
        ..reproductive("breast-cancer", ContentType::Condition, "Breast Cancer")
    }
}

// ============================================================================
// Fertility, Pregnancy and Contraception
// ============================================================================

pub fn ectopic_pregnancy() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Tubal Pregnancy"]),
        name_es: Some("Embarazo Ectópico".into()),
        levels: levels([
            LevelContent::new(
                1,
                "A pregnancy growing outside the uterus, most often in a fallopian tube; it is an emergency.",
                "Belly pain and vaginal bleeding early in pregnancy need urgent care. A burst tube \
                 can cause dangerous internal bleeding.",
            )
            .with_terms([term("fallopian tube", "Tube carrying the egg from the ovary to the uterus")])
            .with_counseling(["Seek emergency care for severe abdominal pain, fainting or shoulder pain in early pregnancy."]),
            LevelContent::new(
                3,
                "Suspect with a positive hCG and no intrauterine pregnancy on transvaginal ultrasound; unstable patients need surgery.",
                "**Risk factors:** prior ectopic, PID and tubal damage, tubal surgery, IUD in place \
                 at conception, assisted reproduction. **Management:** methotrexate for stable, \
                 unruptured cases meeting criteria; laparoscopic salpingostomy or salpingectomy \
                 otherwise.",
            )
            .with_terms([term("discriminatory zone", "hCG level above which an intrauterine pregnancy should be visible on ultrasound")])
            .with_case(case(
                "Pain at 6 weeks",
                "A 28-year-old at 6 weeks has left pelvic pain, spotting, hCG 3,200 and an empty uterus on ultrasound. She is hypotensive.",
                "Treat as ruptured ectopic: resuscitate and take to surgery.",
                "Repeating hCG in 48 hours in an unstable patient.",
            )),
        ]),
        citations: vec![citation(
            "acog-pb-193",
            CitationType::Guideline,
            "ACOG Practice Bulletin 193: Tubal Ectopic Pregnancy",
            &["American College of Obstetricians and Gynecologists"],
            "Obstet Gynecol",
        )],
        cross_references: vec![
            cross_ref("pelvic-inflammatory-disease", ContentType::Condition, Relationship::Related, "Pelvic Inflammatory Disease"),
            cross_ref("prenatal-care", ContentType::Topic, Relationship::SeeAlso, "Prenatal Care"),
        ],
        tags: ContentTags {
            exam_relevance: exam(true, true, &["obgyn", "emergency-medicine"]),
            ..tags(
                &["reproductive"],
                &["obstetrics", "emergency"],
                &["ectopic", "hCG", "methotrexate"],
                ClinicalRelevance::Critical,
            )
        },
        ..reproductive("ectopic-pregnancy", ContentType::Condition, "Ectopic Pregnancy")
    }
}

pub fn contraception() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Birth Control", "Family Planning"]),
        name_es: Some("Anticoncepción".into()),
        levels: levels([
            LevelContent::new(
                1,
                "Methods that prevent pregnancy, from condoms and pills to implants and IUDs.",
                "Long-acting methods such as the implant and IUDs are the most effective because \
                 they do not depend on remembering a daily step. Only condoms also protect \
                 against STIs.",
            )
            .with_terms([
                term("IUD", "A small device placed in the uterus that prevents pregnancy for years"),
                term("LARC", "Long-acting reversible contraception"),
            ]),
            LevelContent::new(
                3,
                "Method choice follows typical-use effectiveness and the US Medical Eligibility Criteria (US MEC).",
                "**Typical-use failure:** implant 0.1%, IUDs 0.1-0.8%, injectable 4%, pill/patch/ring \
                 7%, male condom 13%. **US MEC category 4 for estrogen:** migraine with aura, \
                 smokers over 35, history of VTE, under 21 days postpartum. **Emergency \
                 contraception:** copper IUD within 5 days is most effective.",
            )
            .with_terms([term("US MEC", "CDC eligibility criteria rating contraceptive safety by medical condition")]),
        ]),
        citations: vec![citation(
            "cdc-us-mec-2024",
            CitationType::Guideline,
            "U.S. Medical Eligibility Criteria for Contraceptive Use, 2024",
            &["Nguyen AT", "Curtis KM", "Tepper NK"],
            "MMWR Recomm Rep",
        )],
        cross_references: vec![
            cross_ref("condom-use", ContentType::Topic, Relationship::SeeAlso, "Condom Use"),
            cross_ref("ectopic-pregnancy", ContentType::Condition, Relationship::Related, "Ectopic Pregnancy"),
        ],
        tags: tags(
            &["reproductive"],
            &["family-planning", "prevention"],
            &["contraception", "IUD", "implant", "US MEC"],
            ClinicalRelevance::High,
        ),
        ..reproductive("contraception", ContentType::Topic, "Contraception")
    }
}

pub fn infertility() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Subfertility"]),
        name_es: Some("Infertilidad".into()),
        levels: levels([
            LevelContent::new(
                1,
                "Not getting pregnant after a year of trying (or six months if over 35).",
                "Infertility affects about one in eight couples. Causes can come from either \
                 partner, and both should be evaluated together.",
            )
            .with_terms([term("ovulation", "Release of an egg from the ovary")]),
            LevelContent::new(
                3,
                "Evaluate ovulation, tubal patency, uterine cavity, ovarian reserve and semen analysis in parallel.",
                "**Female factors:** ovulatory dysfunction, tubal disease (often after chlamydia \
                 or gonorrhea), endometriosis, uterine factors, diminished reserve (AMH). **Male \
                 factors:** abnormal semen analysis in about half of couples. **Treatment:** \
                 ovulation induction, intrauterine insemination, IVF.",
            )
            .with_terms([
                term("hysterosalpingogram", "X-ray dye study assessing tubal patency and uterine cavity"),
                term("AMH", "Anti-Müllerian hormone, a marker of ovarian reserve"),
            ]),
        ]),
        citations: vec![citation(
            "asrm-infertility-2020",
            CitationType::Guideline,
            "Definitions of Infertility and Recurrent Pregnancy Loss",
            &["Practice Committee of the American Society for Reproductive Medicine"],
            "Fertil Steril",
        )],
        cross_references: vec![
            cross_ref("female-infertility-workup", ContentType::Topic, Relationship::Child, "Female Infertility Workup"),
            cross_ref("male-infertility-workup", ContentType::Topic, Relationship::Child, "Male Infertility Workup"),
            cross_ref("polycystic-ovary-syndrome", ContentType::Condition, Relationship::Related, "PCOS"),
        ],
        tags: tags(
            &["reproductive"],
            &["fertility"],
            &["infertility", "IVF", "semen analysis", "AMH"],
            ClinicalRelevance::High,
        ),
        ..reproductive("infertility", ContentType::Topic, "Infertility")
    }
}

pub fn prenatal_care() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Antenatal Care"]),
        name_es: Some("Control Prenatal".into()),
        levels: levels([
            LevelContent::new(
                1,
                "Regular check-ups during pregnancy that keep parent and baby healthy.",
                "Visits track blood pressure, weight and the baby's growth, and offer blood tests \
                 and ultrasounds at set times.",
            )
            .with_terms([term("trimester", "One of the three roughly three-month stages of pregnancy")])
            .with_counseling(["Start folic acid at least one month before trying to conceive."]),
            LevelContent::new(
                3,
                "Visit schedule, trimester-specific screening and preventive interventions from the first visit to delivery.",
                "**First visit:** blood type and antibody screen, CBC, HIV, syphilis, hepatitis B, \
                 rubella immunity, urine culture. **24-28 weeks:** glucose challenge. **35-37 \
                 weeks:** group B streptococcus culture. **Vaccines:** Tdap at 27-36 weeks, \
                 influenza, RSV in season.",
            )
            .with_terms([term("GBS", "Group B streptococcus, screened late in pregnancy to guide intrapartum antibiotics")]),
        ]),
        citations: vec![citation(
            "aap-acog-perinatal",
            CitationType::Textbook,
            "Guidelines for Perinatal Care, 9th Edition",
            &["American Academy of Pediatrics", "American College of Obstetricians and Gynecologists"],
            "AAP/ACOG",
        )],
        cross_references: vec![
            cross_ref("preeclampsia", ContentType::Condition, Relationship::Child, "Preeclampsia"),
            cross_ref("gestational-diabetes", ContentType::Condition, Relationship::Child, "Gestational Diabetes"),
            cross_ref("congenital-syphilis", ContentType::Condition, Relationship::SeeAlso, "Congenital Syphilis"),
        ],
        tags: tags(
            &["reproductive"],
            &["obstetrics", "prevention"],
            &["prenatal", "pregnancy", "screening"],
            ClinicalRelevance::High,
        ),
        ..reproductive("prenatal-care", ContentType::Topic, "Prenatal Care")
    }
}

pub fn preeclampsia() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Pre-eclampsia", "Toxemia of Pregnancy"]),
        name_es: Some("Preeclampsia".into()),
        levels: levels([
            LevelContent::new(
                1,
                "High blood pressure that starts after 20 weeks of pregnancy and can harm the organs.",
                "Headache, vision changes, upper belly pain or sudden swelling need urgent \
                 attention. Delivery of the baby and placenta is the cure.",
            )
            .with_terms([term("placenta", "Organ that connects the baby to the parent's blood supply")]),
            LevelContent::new(
                3,
                "New hypertension after 20 weeks with proteinuria or end-organ dysfunction, rooted in abnormal placentation.",
                "**Severe features:** BP >= 160/110, platelets < 100,000, doubled transaminases, \
                 creatinine > 1.1, pulmonary edema, new headache or visual symptoms. \
                 **Management:** antihypertensives (labetalol, nifedipine, hydralazine), magnesium \
                 sulfate seizure prophylaxis, delivery at 37 weeks or at 34 with severe features. \
                 **Prevention:** low-dose aspirin from 12 weeks for high-risk patients.",
            )
            .with_terms([
                term("HELLP", "Hemolysis, elevated liver enzymes and low platelets"),
                term("eclampsia", "Seizures in a patient with preeclampsia"),
            ]),
        ]),
        citations: vec![citation(
            "acog-pb-222",
            CitationType::Guideline,
            "ACOG Practice Bulletin 222: Gestational Hypertension and Preeclampsia",
            &["American College of Obstetricians and Gynecologists"],
            "Obstet Gynecol",
        )],
        cross_references: vec![
            cross_ref("prenatal-care", ContentType::Topic, Relationship::Parent, "Prenatal Care"),
            cross_ref("postpartum-hemorrhage", ContentType::Condition, Relationship::Sibling, "Postpartum Hemorrhage"),
        ],
        tags: ContentTags {
            exam_relevance: exam(true, true, &["obgyn"]),
            ..tags(
                &["reproductive", "cardiovascular"],
                &["obstetrics"],
                &["preeclampsia", "HELLP", "magnesium sulfate"],
                ClinicalRelevance::Critical,
            )
        },
        ..reproductive("preeclampsia", ContentType::Condition, "Preeclampsia")
    }
}

pub fn gestational_diabetes() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["GDM"]),
        name_es: Some("Diabetes Gestacional".into()),
        levels: levels([
            LevelContent::new(
                1,
                "High blood sugar that first appears during pregnancy.",
                "It usually goes away after birth but raises the chance of type 2 diabetes later. \
                 Diet, activity and sometimes insulin keep sugar in range.",
            )
            .with_terms([term("glucose", "The main sugar in the blood")]),
            LevelContent::new(
                3,
                "Placental hormones increase insulin resistance; screen at 24-28 weeks and treat to fasting < 95 mg/dL.",
                "**Screening:** one-step 75 g OGTT or two-step 50 g challenge then 100 g OGTT. \
                 **Complications:** macrosomia, shoulder dystocia, neonatal hypoglycemia. \
                 **Treatment:** nutrition therapy, then insulin. **Postpartum:** 75 g OGTT at 4-12 \
                 weeks.",
            )
            .with_terms([term("macrosomia", "Birth weight above 4,000-4,500 g")]),
        ]),
        citations: vec![citation(
            "acog-pb-190",
            CitationType::Guideline,
            "ACOG Practice Bulletin 190: Gestational Diabetes Mellitus",
            &["American College of Obstetricians and Gynecologists"],
            "Obstet Gynecol",
        )],
        cross_references: vec![cross_ref("prenatal-care", ContentType::Topic, Relationship::Parent, "Prenatal Care")],
        tags: tags(
            &["reproductive", "endocrine"],
            &["obstetrics"],
            &["gestational diabetes", "OGTT", "macrosomia"],
            ClinicalRelevance::High,
        ),
        ..reproductive("gestational-diabetes", ContentType::Condition, "Gestational Diabetes")
    }
}

pub fn postpartum_hemorrhage() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["PPH"]),
        name_es: Some("Hemorragia Posparto".into()),
        levels: levels([
            LevelContent::new(
                1,
                "Heavy bleeding after giving birth; a leading cause of maternal death worldwide.",
                "Soaking more than one pad an hour, large clots, dizziness or a racing heart after \
                 delivery need immediate care.",
            )
            .with_terms([term("uterine atony", "When the uterus does not tighten after birth")]),
            LevelContent::new(
                3,
                "Cumulative blood loss >= 1,000 mL; causes follow the four Ts: tone, trauma, tissue, thrombin.",
                "**Tone (70%):** uterine massage, oxytocin, methylergonovine (avoid in \
                 hypertension), carboprost (avoid in asthma), misoprostol. **Tranexamic acid** \
                 within 3 hours of birth. **Escalation:** balloon tamponade, embolization, \
                 surgery, massive transfusion protocol.",
            )
            .with_terms([term("four Ts", "Tone, trauma, tissue and thrombin causes of postpartum hemorrhage")]),
        ]),
        citations: vec![citation(
            "acog-pb-183",
            CitationType::Guideline,
            "ACOG Practice Bulletin 183: Postpartum Hemorrhage",
            &["American College of Obstetricians and Gynecologists"],
            "Obstet Gynecol",
        )],
        cross_references: vec![cross_ref("preeclampsia", ContentType::Condition, Relationship::Sibling, "Preeclampsia")],
        tags: tags(
            &["reproductive", "hematologic"],
            &["obstetrics", "emergency"],
            &["postpartum hemorrhage", "atony", "oxytocin"],
            ClinicalRelevance::Critical,
        ),
        ..reproductive("postpartum-hemorrhage", ContentType::Condition, "Postpartum Hemorrhage")
    }
}

// ============================================================================
// Male Reproductive Conditions
// ============================================================================

pub fn benign_prostatic_hyperplasia() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["BPH", "Enlarged Prostate"]),
        name_es: Some("Hiperplasia Prostática Benigna".into()),
        levels: levels([
            LevelContent::new(
                1,
                "A non-cancerous enlargement of the prostate common in older men.",
                "The growing prostate squeezes the urethra, causing a weak stream, urgency and \
                 getting up at night to urinate.",
            )
            .with_terms([term("nocturia", "Waking at night to urinate")]),
            LevelContent::new(
                3,
                "Transitional-zone hyperplasia driven by dihydrotestosterone causing lower urinary tract symptoms.",
                "**Evaluation:** IPSS score, urinalysis, digital rectal exam, PSA when it changes \
                 management. **Treatment:** alpha-blockers (tamsulosin) for rapid relief, \
                 5-alpha-reductase inhibitors (finasteride) for large glands, combination therapy, \
                 TURP or other procedures for refractory symptoms or retention.",
            )
            .with_terms([term("5-alpha-reductase", "Enzyme converting testosterone to dihydrotestosterone")]),
        ]),
        citations: vec![citation(
            "aua-bph-2023",
            CitationType::Guideline,
            "Management of Lower Urinary Tract Symptoms Attributed to BPH: AUA Guideline",
            &["Sandhu JS", "Bixler BR", "Dahm P"],
            "J Urol",
        )],
        cross_references: vec![
            cross_ref("male-reproductive-anatomy", ContentType::Structure, Relationship::Parent, "Male Reproductive Anatomy"),
            cross_ref("prostate-cancer", ContentType::Condition, Relationship::Sibling, "Prostate Cancer"),
        ],
        tags: tags(
            &["reproductive", "renal"],
            &["urology"],
            &["BPH", "LUTS", "tamsulosin", "finasteride"],
            ClinicalRelevance::Moderate,
        ),
        ..reproductive("benign-prostatic-hyperplasia", ContentType::Condition, "Benign Prostatic Hyperplasia")
    }
}

pub fn prostate_cancer() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Prostate Adenocarcinoma"]),
        name_es: Some("Cáncer de Próstata".into()),
        levels: levels([
            LevelContent::new(
                1,
                "A common cancer in older men that often grows slowly.",
                "Many prostate cancers never cause harm. Men aged 55 to 69 can talk with their \
                 doctor about whether PSA screening is right for them.",
            )
            .with_terms([term("PSA", "Prostate-specific antigen, a blood test used in screening")])
            .with_counseling(["PSA screening is a shared decision, not an automatic test."]),
            LevelContent::new(
                3,
                "Adenocarcinoma of the peripheral zone graded by Gleason/ISUP grade group; risk stratification guides surveillance versus treatment.",
                "**Diagnosis:** elevated PSA, MRI, targeted biopsy. **Low risk:** active \
                 surveillance. **Localized higher risk:** prostatectomy or radiation with \
                 androgen deprivation. **Metastatic:** androgen deprivation plus androgen \
                 receptor pathway inhibitors.",
            )
            .with_terms([term("Gleason score", "Histologic grade from the two most common tumor patterns")]),
        ]),
        citations: vec![citation(
            "uspstf-prostate-2018",
            CitationType::Guideline,
            "Screening for Prostate Cancer: USPSTF Recommendation Statement",
            &["US Preventive Services Task Force"],
            "JAMA",
        )],
        cross_references: vec![cross_ref("benign-prostatic-hyperplasia", ContentType::Condition, Relationship::Sibling, "BPH")],
        tags: tags(
            &["reproductive"],
            &["oncology", "urology", "screening"],
            &["prostate cancer", "PSA", "Gleason"],
            ClinicalRelevance::High,
        ),
        ..reproductive("prostate-cancer", ContentType::Condition, "Prostate Cancer")
    }
}

pub fn testicular_cancer() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Germ Cell Tumor"]),
        name_es: Some("Cáncer de Testículo".into()),
        levels: levels([
            LevelContent::new(
                1,
                "The most common cancer in young men, and one of the most curable.",
                "A painless lump or heaviness in a testicle should be checked promptly.",
            )
            .with_terms([term("testicle", "Male gonad that makes sperm and testosterone")]),
            LevelContent::new(
                3,
                "Germ cell tumors (seminoma, non-seminoma) in men 15-35; cryptorchidism is the main risk factor.",
                "**Evaluation:** scrotal ultrasound, AFP, beta-hCG, LDH. **Never biopsy \
                 transscrotally.** **Treatment:** radical inguinal orchiectomy, then surveillance, \
                 chemotherapy (BEP) or radiation by stage and histology.",
            )
            .with_terms([
                term("seminoma", "Radiosensitive germ cell tumor with normal AFP"),
                term("cryptorchidism", "Undescended testis"),
            ]),
        ]),
        citations: vec![citation(
            "aua-testis-2023",
            CitationType::Guideline,
            "Diagnosis and Treatment of Early-Stage Testicular Cancer: AUA Guideline",
            &["Stephenson A", "Bass EB", "Bixler BR"],
            "J Urol",
        )],
        cross_references: vec![
            cross_ref("testicular-torsion", ContentType::Condition, Relationship::Sibling, "Testicular Torsion"),
            cross_ref("epididymitis", ContentType::Condition, Relationship::SeeAlso, "Epididymitis"),
        ],
        tags: tags(
            &["reproductive"],
            &["oncology", "urology"],
            &["testicular cancer", "seminoma", "AFP", "hCG"],
            ClinicalRelevance::High,
        ),
        ..reproductive("testicular-cancer", ContentType::Condition, "Testicular Cancer")
    }
}

pub fn testicular_torsion() -> EducationalContent {
    EducationalContent {
        alternate_names: names(&["Spermatic Cord Torsion"]),
        name_es: Some("Torsión Testicular".into()),
        levels: levels([
            LevelContent::new(
                1,
                "A twisted testicle that cuts off its own blood supply; a surgical emergency.",
                "Sudden, severe pain in one testicle, often with nausea, needs emergency care right \
                 away. The testicle can often be saved within six hours.",
            )
            .with_terms([term("spermatic cord", "Cord carrying the blood vessels and vas deferens to the testis")]),
            LevelContent::new(
                3,
                "Bell-clapper deformity allows intravaginal torsion; absent cremasteric reflex and a high-riding testis are classic.",
                "**Diagnosis:** clinical; Doppler ultrasound if it will not delay surgery. TWIST \
                 score aids risk stratification. **Treatment:** immediate detorsion and bilateral \
                 orchiopexy. Salvage falls sharply after 6 hours.",
            )
            .with_terms([term("cremasteric reflex", "Testicular elevation when the inner thigh is stroked")])
            .with_case(case(
                "Sudden scrotal pain",
                "A 14-year-old wakes with severe right testicular pain and vomiting; the testis is high-riding and the cremasteric reflex is absent.",
                "Call urology for immediate scrotal exploration.",
                "Treating for epididymitis and discharging with antibiotics.",
            )),
        ]),
        citations: vec![openstax_ch27()],
        cross_references: vec![
            cross_ref("epididymitis", ContentType::Condition, Relationship::Related, "Epididymitis"),
            cross_ref("testicular-cancer", ContentType::Condition, Relationship::Sibling, "Testicular Cancer"),
        ],
        tags: ContentTags {
            exam_relevance: exam(true, true, &["surgery", "emergency-medicine"]),
            ..tags(
                &["reproductive"],
                &["urology", "emergency"],
                &["torsion", "acute scrotum", "orchiopexy"],
                ClinicalRelevance::Critical,
            )
        },
        ..reproductive("testicular-torsion", ContentType::Condition, "Testicular Torsion")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_family_has_23_modules() {
        assert_eq!(FAMILY.modules.len(), 23);
    }

    #[test]
    fn test_slugs_match_content_ids() {
        for def in FAMILY.modules {
            assert_eq!((def.build)().id, def.slug);
        }
    }

    #[test]
    fn test_level_keys_match_level_numbers() {
        for def in FAMILY.modules {
            let content = (def.build)();
            assert!(!content.levels.is_empty(), "{} has no levels", content.id);
            for (key, level) in &content.levels {
                assert_eq!(*key, level.level, "{} level {}", content.id, key);
                assert!((1..=5).contains(key));
            }
        }
    }

    #[test]
    fn test_key_terms_unique_per_level() {
        for def in FAMILY.modules {
            let content = (def.build)();
            for level in content.levels.values() {
                let mut seen = HashSet::new();
                for term in &level.key_terms {
                    assert!(seen.insert(&term.term), "{}: duplicate term {}", content.id, term.term);
                }
            }
        }
    }

    #[test]
    fn test_metadata_defaults() {
        let content = ovarian_cancer();
        assert_eq!(content.version, 1);
        assert_eq!(content.status, PublicationStatus::Published);
        assert_eq!(content.created_at, content.updated_at);
        assert_eq!(content.tags.clinical_relevance, ClinicalRelevance::Critical);
    }

    #[test]
    fn test_spanish_names_kept_out_of_alternate_names() {
        for def in FAMILY.modules {
            let content = (def.build)();
            let name_es = content.name_es.as_deref().unwrap_or_default();
            assert!(!name_es.trim().is_empty(), "{} has no Spanish name", content.id);
            assert!(
                content.alternate_names.iter().all(|n| !n.contains("nameEs:")),
                "{}: {:?}",
                content.id,
                content.alternate_names
            );
        }

        let value = serde_json::to_value(endometriosis()).unwrap();
        assert_eq!(value["nameEs"], "Endometriosis");
        assert_eq!(value["alternateNames"], serde_json::json!([]));
    }
}
