//! Mathématiques definitions for première and terminale.
//!
//! Skill and chapter identifiers follow the questionnaire content; labels are
//! the French strings shown to students.

use std::collections::BTreeMap;

use super::{chapter, policy, tiers, DiagnosticDefinition, SkillTemplate, DIAGNOSTIC_STAGE};
use crate::diagnostics::domain::{Level, Track};

pub(super) fn premiere() -> DiagnosticDefinition {
    let mut skills = BTreeMap::new();
    skills.insert(
        "algebra",
        vec![
            SkillTemplate::core("second-degre", "Polynômes du second degré"),
            SkillTemplate::core("calcul-litteral", "Calcul littéral et équations"),
            SkillTemplate::supporting("inequations", "Inéquations et tableaux de signes"),
            SkillTemplate::new("suites-numeriques", "Suites arithmétiques et géométriques"),
        ],
    );
    skills.insert(
        "analysis",
        vec![
            SkillTemplate::core("derivation", "Dérivation et nombre dérivé"),
            SkillTemplate::new("variations", "Variations et extremums"),
            SkillTemplate::new("exponentielle", "Fonction exponentielle"),
            SkillTemplate::supporting("fonctions-reference", "Fonctions de référence"),
        ],
    );
    skills.insert(
        "geometry",
        vec![
            SkillTemplate::core("produit-scalaire", "Produit scalaire dans le plan"),
            SkillTemplate::new("geometrie-reperee", "Géométrie repérée"),
            SkillTemplate::new("trigonometrie", "Trigonométrie"),
        ],
    );
    skills.insert(
        "probabilities",
        vec![
            SkillTemplate::core(
                "probabilites-conditionnelles",
                "Probabilités conditionnelles",
            ),
            SkillTemplate::new("variables-aleatoires", "Variables aléatoires réelles"),
            SkillTemplate::new("statistiques", "Statistiques et échantillonnage"),
        ],
    );

    let chapters = vec![
        chapter(
            "ch-m1-second-degre",
            "Second degré",
            "Trinômes, factorisation et résolution d'équations.",
            "algebra",
            &["second-degre", "calcul-litteral", "inequations"],
        ),
        chapter(
            "ch-m1-suites",
            "Suites numériques",
            "Suites arithmétiques et géométriques, sens de variation.",
            "algebra",
            &["suites-numeriques"],
        ),
        chapter(
            "ch-m1-derivation",
            "Dérivation",
            "Nombre dérivé, tangentes et fonctions dérivées.",
            "analysis",
            &["derivation", "variations"],
        ),
        chapter(
            "ch-m1-exponentielle",
            "Fonction exponentielle",
            "Propriétés algébriques et croissance exponentielle.",
            "analysis",
            &["exponentielle"],
        ),
        chapter(
            "ch-m1-fonctions",
            "Fonctions de référence",
            "Carré, inverse, racine carrée et valeur absolue.",
            "analysis",
            &["fonctions-reference"],
        ),
        chapter(
            "ch-m1-produit-scalaire",
            "Produit scalaire",
            "Projections, normes et applications géométriques.",
            "geometry",
            &["produit-scalaire"],
        ),
        chapter(
            "ch-m1-geometrie-reperee",
            "Géométrie repérée et trigonométrie",
            "Droites, cercles et cercle trigonométrique.",
            "geometry",
            &["geometrie-reperee", "trigonometrie"],
        ),
        chapter(
            "ch-m1-probabilites",
            "Probabilités conditionnelles",
            "Arbres pondérés, indépendance et statistiques.",
            "probabilities",
            &["probabilites-conditionnelles", "statistiques"],
        ),
        chapter(
            "ch-m1-variables-aleatoires",
            "Variables aléatoires",
            "Loi de probabilité, espérance et écart type.",
            "probabilities",
            &["variables-aleatoires"],
        ),
    ];

    DiagnosticDefinition {
        key: "maths-premiere-p2",
        version: "2024.2",
        label: "Diagnostic Mathématiques Première",
        track: Track::Maths,
        level: Level::Premiere,
        stage: DIAGNOSTIC_STAGE,
        skills,
        chapters,
        scoring_policy: policy(
            &[
                ("algebra", 0.30),
                ("analysis", 0.30),
                ("geometry", 0.20),
                ("probabilities", 0.20),
            ],
            tiers(65.0, 35.0, 45.0, 55.0),
        ),
    }
}

pub(super) fn terminale() -> DiagnosticDefinition {
    let mut skills = BTreeMap::new();
    skills.insert(
        "algebra",
        vec![
            SkillTemplate::core("recurrence", "Raisonnement par récurrence"),
            SkillTemplate::new("suites-convergence", "Limites de suites"),
            SkillTemplate::supporting("combinatoire", "Combinatoire et dénombrement"),
        ],
    );
    skills.insert(
        "analysis",
        vec![
            SkillTemplate::core("limites-fonctions", "Limites de fonctions"),
            SkillTemplate::supporting("continuite", "Continuité et théorème des valeurs intermédiaires"),
            SkillTemplate::core("logarithme", "Fonction logarithme népérien"),
            SkillTemplate::new("convexite", "Convexité et points d'inflexion"),
            SkillTemplate::new("primitives-integrales", "Primitives et calcul intégral"),
        ],
    );
    skills.insert(
        "geometry",
        vec![
            SkillTemplate::core("vecteurs-espace", "Vecteurs et droites de l'espace"),
            SkillTemplate::new("produit-scalaire-espace", "Produit scalaire dans l'espace"),
            SkillTemplate::new("representations-parametriques", "Représentations paramétriques et équations de plans"),
        ],
    );
    skills.insert(
        "probabilities",
        vec![
            SkillTemplate::core("loi-binomiale", "Schéma de Bernoulli et loi binomiale"),
            SkillTemplate::new("sommes-variables", "Sommes de variables aléatoires"),
            SkillTemplate::new("concentration", "Concentration et loi des grands nombres"),
        ],
    );

    let chapters = vec![
        chapter(
            "ch-mt-suites",
            "Suites et récurrence",
            "Récurrence, limites de suites et comparaison.",
            "algebra",
            &["recurrence", "suites-convergence"],
        ),
        chapter(
            "ch-mt-combinatoire",
            "Combinatoire et dénombrement",
            "Permutations, combinaisons et coefficients binomiaux.",
            "algebra",
            &["combinatoire"],
        ),
        chapter(
            "ch-mt-limites",
            "Limites et continuité",
            "Limites de fonctions, asymptotes et théorème des valeurs intermédiaires.",
            "analysis",
            &["limites-fonctions", "continuite"],
        ),
        chapter(
            "ch-mt-logarithme",
            "Fonction logarithme",
            "Propriétés algébriques et équations avec ln.",
            "analysis",
            &["logarithme"],
        ),
        chapter(
            "ch-mt-convexite",
            "Convexité",
            "Dérivée seconde et position relative des courbes.",
            "analysis",
            &["convexite"],
        ),
        chapter(
            "ch-mt-primitives",
            "Primitives et intégrales",
            "Primitives usuelles et calcul d'aires.",
            "analysis",
            &["primitives-integrales"],
        ),
        chapter(
            "ch-mt-espace",
            "Géométrie dans l'espace",
            "Vecteurs, plans et orthogonalité dans l'espace.",
            "geometry",
            &[
                "vecteurs-espace",
                "produit-scalaire-espace",
                "representations-parametriques",
            ],
        ),
        chapter(
            "ch-mt-binomiale",
            "Loi binomiale",
            "Épreuves répétées et coefficients binomiaux.",
            "probabilities",
            &["loi-binomiale"],
        ),
        chapter(
            "ch-mt-grands-nombres",
            "Sommes et grands nombres",
            "Espérance de sommes et inégalités de concentration.",
            "probabilities",
            &["sommes-variables", "concentration"],
        ),
    ];

    DiagnosticDefinition {
        key: "maths-terminale-p2",
        version: "2024.2",
        label: "Diagnostic Mathématiques Terminale",
        track: Track::Maths,
        level: Level::Terminale,
        stage: DIAGNOSTIC_STAGE,
        skills,
        chapters,
        scoring_policy: policy(
            &[
                ("algebra", 0.20),
                ("analysis", 0.40),
                ("geometry", 0.20),
                ("probabilities", 0.20),
            ],
            tiers(70.0, 30.0, 50.0, 50.0),
        ),
    }
}
