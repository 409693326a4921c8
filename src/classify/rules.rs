//! Curated category rules for topic classification.
//!
//! Each rule pairs a category name with the keywords that select it. Rule
//! order IS the priority order: classification walks the table top to bottom
//! and the first rule with any keyword hit wins, which is what keeps
//! outcomes stable for topics whose keywords span several categories.
//! Reordering entries changes classifications - treat the order as part of
//! the contract.
//!
//! Keywords are lowercase and matched as substrings against lowercased topic
//! text. Trailing spaces on short keywords ("gut ", "ion ") keep them from
//! firing inside longer words.

/// A category and the keywords that select it.
pub type CategoryRule = (&'static str, &'static [&'static str]);

/// The ordered classification table.
pub const RULES: &[CategoryRule] = &[
    // Medical specialties, most specific first
    (
        "Oncology & Cancer",
        &[
            "cancer", "tumor", "oncol", "leukemia", "lymphoma", "melanoma", "carcinoma", "myeloma",
            "sarcoma", "neoplasm", "metasta", "chemo", "radiother", "malignan",
        ],
    ),
    (
        "Cardiovascular",
        &[
            "cardio",
            "heart",
            "cardiac",
            "coronary",
            "artery",
            "arterial",
            "vascular",
            "atheroscl",
            "myocard",
            "aortic",
            "hypertens",
            "stroke",
            "thromb",
            "aneurysm",
            "arrhythm",
            "atrial",
            "ventricul",
            "infarct",
            "angioplas",
            "stent",
            "ischemic",
            "hemodynam",
        ],
    ),
    (
        "Neuroscience & Neurology",
        &[
            "neuro",
            "brain",
            "cognit",
            "alzheimer",
            "parkinson",
            "epilep",
            "cortex",
            "cerebr",
            "nervous system",
            "synap",
            "hippocam",
            "dementia",
            "multiple sclerosis",
            "spinal cord",
            "motor neuron",
            "neuropath",
            "amyotrophic",
            "als ",
            "huntington",
            "migraine",
            "headache",
            "circadian",
            "sleep",
            "melatonin",
        ],
    ),
    (
        "Infectious Disease",
        &[
            "infect",
            "virus",
            "viral",
            "bacteri",
            "hiv",
            "hepatitis",
            "covid",
            "pathogen",
            "malaria",
            "tuberculosis",
            "antibiotic",
            "antimicrob",
            "sepsis",
            "influenza",
            "herpes",
            "parasit",
            "fungal",
            "mycobact",
            "vaccine",
            "ebola",
            "dengue",
            "zika",
            "leptospir",
            "syphilis",
            "chlamydia",
            "gonorrhea",
            "measles",
            "polio",
        ],
    ),
    (
        "Immunology",
        &[
            "immun",
            "t-cell",
            "b-cell",
            "antibod",
            "cytokine",
            "inflamm",
            "autoimmun",
            "allerg",
            "lymphocyte",
            "macrophage",
            "interleukin",
            "toll-like",
            "complement",
            "antigen",
        ],
    ),
    (
        "Genetics & Genomics",
        &[
            "gene",
            "genom",
            "dna",
            "rna",
            "epigene",
            "crispr",
            "mutation",
            "chromosome",
            "heredit",
            "genetic",
            "sequenc",
            "transcript",
            "methylat",
            "polymorphism",
            "allele",
            "genotype",
            "phenotype",
        ],
    ),
    (
        "Gastroenterology & Hepatology",
        &[
            "gastro",
            "liver",
            "hepat",
            "intestin",
            "colon",
            "bowel",
            "gut ",
            "pancrea",
            "esophag",
            "stomach",
            "digest",
            "biliary",
            "gallbladder",
            "cirrhosis",
            "ibd",
            "crohn",
            "ulcer",
        ],
    ),
    (
        "Pulmonary & Respiratory",
        &[
            "lung", "pulmon", "respiratory", "airway", "asthma", "copd", "bronch", "alveol",
            "pneumon", "thorac", "ventilat",
        ],
    ),
    (
        "Nephrology & Urology",
        &[
            "kidney", "renal", "nephro", "urolog", "urin", "bladder", "prostat", "dialysis",
            "glomerul", "ureter",
        ],
    ),
    (
        "Endocrinology & Metabolism",
        &[
            "endocrin",
            "hormone",
            "diabet",
            "insulin",
            "thyroid",
            "adrenal",
            "pituitary",
            "metabol",
            "obesity",
            "glucos",
            "lipid",
            "cholesterol",
            "vitamin d",
            "vitamin b",
            "nutrition",
            "diet",
            "calori",
        ],
    ),
    (
        "Ophthalmology",
        &[
            "ophthalm",
            "eye ",
            "ocular",
            "retin",
            "cornea",
            "glauco",
            "cataract",
            "vision",
            "macular",
            "optic nerve",
        ],
    ),
    (
        "Dermatology",
        &[
            "dermat",
            "skin ",
            "cutaneous",
            "epiderm",
            "psoriasis",
            "eczema",
            "wound heal",
        ],
    ),
    (
        "Orthopedics & Musculoskeletal",
        &[
            "orthop",
            "bone ",
            "fractur",
            "joint",
            "arthrit",
            "osteopor",
            "musculoskel",
            "spine",
            "cartilage",
            "tendon",
            "ligament",
            "skeletal",
            "elbow",
            "knee",
            "hip ",
            "shoulder",
            "wrist",
            "ankle",
        ],
    ),
    (
        "Obstetrics & Gynecology",
        &[
            "obstet",
            "gynec",
            "pregnan",
            "fetal",
            "maternal",
            "placenta",
            "uterine",
            "ovarian",
            "endometri",
            "menstrua",
            "fertility",
            "ivf",
        ],
    ),
    (
        "Pediatrics & Development",
        &[
            "pediatr",
            "child",
            "infant",
            "neonat",
            "newborn",
            "adolesc",
            "developmental",
            "congenital",
            "birth defect",
        ],
    ),
    (
        "Psychiatry & Mental Health",
        &[
            "psych",
            "mental health",
            "depress",
            "anxiety",
            "schizo",
            "bipolar",
            "addiction",
            "substance abuse",
            "ptsd",
            "autism",
            "adhd",
            "suicid",
            "eating disorder",
            "anorexia",
            "bulimia",
            "body image",
            "dysmorphi",
        ],
    ),
    (
        "Surgery & Surgical Specialties",
        &[
            "surg",
            "transplant",
            "resection",
            "anastom",
            "laparoscop",
            "endoscop",
            "implant",
            "graft",
            "trauma",
            "emergenc",
        ],
    ),
    (
        "Radiology & Imaging",
        &[
            "imaging",
            "mri",
            "ct scan",
            "radiol",
            "ultrasound",
            "pet scan",
            "x-ray",
            "mammogr",
            "tomograph",
            "fluoroscop",
            "angiogra",
            "segmentation",
            "dosimetr",
        ],
    ),
    (
        "Pharmacology & Drug Development",
        &[
            "pharmaco",
            "drug ",
            "therapeutic",
            "medicin",
            "dosage",
            "toxicol",
            "pharmacokin",
            "clinical trial",
        ],
    ),
    (
        "Public Health & Epidemiology",
        &[
            "public health",
            "epidemiol",
            "population health",
            "health policy",
            "health services",
            "healthcare system",
            "global health",
            "health disparit",
            "preventive",
            "screening",
            "outbreak",
            "mortality",
            "morbidity",
            "meta-analysis",
            "systematic review",
            "biomarker",
        ],
    ),
    (
        "Dentistry & Oral Health",
        &[
            "dental",
            "tooth",
            "teeth",
            "oral ",
            "gingiv",
            "periodon",
            "endodont",
            "orthodont",
            "maxillofac",
            "mandib",
            "stoma",
        ],
    ),
    (
        "ENT & Audiology",
        &[
            "hearing",
            "audiol",
            "cochlea",
            "deaf",
            "otolar",
            "ear ",
            "throat",
            "laryn",
            "vocal",
            "speech",
            "tinnitus",
            "vestibul",
            "head and neck",
            "oropharyn",
        ],
    ),
    (
        "Rheumatology",
        &[
            "rheumat",
            "lupus",
            "connective tissue",
            "fibromyalg",
            "gout",
            "scleroderma",
            "vasculitis",
        ],
    ),
    (
        "Hematology",
        &[
            "hematol",
            "blood ",
            "anemia",
            "hemoglobin",
            "coagul",
            "platelet",
            "hemophilia",
            "thrombo",
        ],
    ),
    (
        "Allergy & Asthma",
        &["allerg", "asthma", "anaphyla", "hypersensitiv"],
    ),
    // Basic sciences
    (
        "Biochemistry & Molecular Biology",
        &[
            "protein",
            "enzyme",
            "molecular",
            "biochem",
            "kinase",
            "receptor",
            "ligand",
            "pathway",
            "signaling",
            "cell cycle",
            "apoptosis",
            "mitochondri",
            "ribosom",
            "peptide",
            "collagen",
            "proteoglycan",
            "glycosaminoglycan",
            "phosphodiesterase",
        ],
    ),
    (
        "Cell Biology",
        &[
            "cell ",
            "cellular",
            "stem cell",
            "organelle",
            "membrane",
            "cytoskeleton",
            "nucleus",
            "vesicle",
        ],
    ),
    // Physical sciences and engineering
    (
        "Physics & Astronomy",
        &[
            "physic",
            "quantum",
            "particle",
            "hadron",
            "collid",
            "boson",
            "meson",
            "chromodynamic",
            "photon",
            "laser",
            "optic",
            "plasma",
            "condensed matter",
            "superconductor",
            "magnetic",
            "electr",
            "thermodynamic",
            "gravit",
            "cosmolog",
            "astrophys",
            "astrono",
            "dark matter",
            "galaxy",
            "stellar",
            "solar",
            "nuclear",
            "radioactiv",
            "radiation",
            "ion ",
            "neutron",
            "proton",
        ],
    ),
    (
        "Chemistry",
        &[
            "chemi",
            "catalys",
            "reaction",
            "synthesis",
            "compound",
            "polymer",
            "organic",
            "inorganic",
            "electrochemi",
            "spectroscop",
            "crystal",
        ],
    ),
    (
        "Materials Science & Engineering",
        &[
            "material",
            "nanotech",
            "nanowire",
            "nanoparticle",
            "alloy",
            "ceramic",
            "composite",
            "coating",
            "semiconductor",
            "biomaterial",
            "3d print",
            "additive manufactur",
            "metallurg",
            "corrosion",
            "concrete",
            "welding",
            "glass",
            "fiber",
        ],
    ),
    (
        "Computer Science & AI",
        &[
            "comput",
            "algorithm",
            "machine learning",
            "deep learning",
            "artificial intellig",
            " ai ",
            "neural network",
            "data mining",
            "software",
            "programming",
            "cybersecur",
            "cryptograph",
            "blockchain",
            "natural language",
            "computer vision",
            "robotics",
            "vlsi",
            "fpga",
            "network",
            "internet",
            "database",
            "cloud",
            "petri net",
        ],
    ),
    (
        "Engineering",
        &[
            "engineer",
            "circuit",
            "sensor",
            "signal process",
            "wireless",
            "antenna",
            "microelectron",
            "mems",
            "biomedical engineer",
            "device",
            "hvdc",
            "power system",
            "heat transfer",
            "boiling",
            "hydraulic",
            "propulsion",
            "rocket",
            "aerospace",
            "vehicle",
            "automotive",
            "mechanical",
            "fluid",
            "turbine",
            "combustion",
            "fuel cell",
            "energy harvest",
            "solar cell",
            "battery",
            "motor",
            "rotor",
            "vibration",
            "noise",
            "fatigue",
            "stress analysis",
            "brake",
            "welding",
            "machining",
            "manufactur",
        ],
    ),
    // Life sciences
    (
        "Ecology & Environmental Science",
        &[
            "ecolog",
            "ecosystem",
            "environment",
            "climate",
            "biodiversity",
            "conservation",
            "pollution",
            "sustainab",
            "carbon",
            "marine",
            "freshwater",
            "wildlife",
            "habitat",
            "biofuel",
            "biogas",
            "waste",
            "recycl",
            "water treatment",
            "air quality",
        ],
    ),
    (
        "Plant Science & Agriculture",
        &[
            "plant",
            "botan",
            "crop",
            "agricultur",
            "seed",
            "soil",
            "photosynthesis",
            "chlorophyll",
            "weed",
            "herbicide",
            "forestry",
            "pest",
            "insect",
            "fruit",
            "vegetable",
            "grain",
            "rice",
            "wheat",
            "soybean",
            "maize",
            "cotton",
            "ginger",
            "cucurbit",
        ],
    ),
    (
        "Zoology & Animal Science",
        &[
            "animal",
            "zoolog",
            "insect",
            "fish",
            "bird",
            "mammal",
            "reptile",
            "amphibian",
            "invertebrate",
            "beetle",
            "bee ",
            "ant ",
            "spider",
            "coleoptera",
            "hymenoptera",
            "entomolog",
            "veterinar",
            "livestock",
            "poultry",
            "aquaculture",
        ],
    ),
    (
        "Microbiology",
        &["microb", "bacteri", "yeast", "biofilm", "probiotic", "ferment"],
    ),
    (
        "Paleontology & Geology",
        &[
            "paleontol",
            "fossil",
            "geolog",
            "stratigraph",
            "seism",
            "earthquak",
            "volcanic",
            "tectonic",
            "sediment",
            "mineral",
            "petrol",
            "oil ",
            "gas ",
            "mining",
            "ore ",
        ],
    ),
    // Social sciences and humanities
    (
        "Economics & Business",
        &[
            "econom",
            "financ",
            "market",
            "business",
            "trade",
            "investment",
            "banking",
            "monetary",
            "fiscal",
            "entrepreneur",
            "management",
            "accounting",
            "consumer",
            "franchise",
            "intellectual capital",
            "supply chain",
            "logistics",
        ],
    ),
    (
        "Social Sciences",
        &[
            "social",
            "sociolog",
            "anthropolog",
            "demograph",
            "migration",
            "ethnic",
            "gender",
            "inequality",
            "poverty",
            "urban",
            "rural",
            "community",
            "family",
            "crime",
            "justice",
            "law ",
            "legal",
            "policy",
            "governance",
            "politic",
            "census",
            "population",
            "employment",
            "welfare",
            "housing",
        ],
    ),
    (
        "Education",
        &[
            "education",
            "learning",
            "teaching",
            "curriculum",
            "student",
            "school",
            "university",
            "academic",
            "pedagog",
            "literacy",
        ],
    ),
    (
        "Psychology",
        &[
            "psychology",
            "behavior",
            "cognitive",
            "emotion",
            "personality",
            "memory",
            "attention",
            "perception",
            "motivation",
        ],
    ),
    (
        "Humanities",
        &[
            "histor",
            "philosophy",
            "literature",
            "linguist",
            "language",
            "culture",
            "religion",
            "art ",
            "music",
            "archaeolog",
            "ethics",
            "fashion",
            "textile",
            "media",
            "communication",
            "discourse",
        ],
    ),
    // Math and statistics
    (
        "Mathematics & Statistics",
        &[
            "mathematic",
            "statistic",
            "algebra",
            "geometry",
            "calculus",
            "probability",
            "stochastic",
            "optimization",
            "regression",
            "bayesian",
            "topology",
            "differential equation",
            "graph theory",
            "game theory",
            "queuing",
            "combinatori",
            "number theory",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_table_is_nonempty_and_well_formed() {
        assert!(RULES.len() >= 25, "expected a full curated table");
        for (category, keywords) in RULES {
            assert!(!category.is_empty());
            assert!(!keywords.is_empty(), "category {category} has no keywords");
        }
    }

    #[test]
    fn test_rules_keywords_are_lowercase() {
        for (category, keywords) in RULES {
            for keyword in *keywords {
                assert_eq!(
                    *keyword,
                    keyword.to_lowercase(),
                    "keyword {keyword:?} in {category} must be lowercase"
                );
            }
        }
    }

    #[test]
    fn test_rules_category_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (category, _) in RULES {
            assert!(seen.insert(*category), "duplicate category: {category}");
        }
    }

    #[test]
    fn test_rules_medical_specialties_come_first() {
        assert_eq!(RULES[0].0, "Oncology & Cancer");
    }
}
