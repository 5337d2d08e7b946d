//! NSI definitions for première and terminale.

use std::collections::BTreeMap;

use super::{chapter, policy, tiers, DiagnosticDefinition, SkillTemplate, DIAGNOSTIC_STAGE};
use crate::diagnostics::domain::{Level, Track};

pub(super) fn premiere() -> DiagnosticDefinition {
    let mut skills = BTreeMap::new();
    skills.insert(
        "programming",
        vec![
            SkillTemplate::core("python-bases", "Types de base et affectations en Python"),
            SkillTemplate::core("fonctions", "Fonctions, paramètres et spécification"),
            SkillTemplate::new("modules-bibliotheques", "Modules et bibliothèques"),
        ],
    );
    skills.insert(
        "data",
        vec![
            SkillTemplate::core("types-construits", "P-uplets, listes et dictionnaires"),
            SkillTemplate::new("traitement-tables", "Traitement de données en tables"),
            SkillTemplate::core("representation-binaire", "Représentation binaire des entiers"),
        ],
    );
    skills.insert(
        "systems",
        vec![
            SkillTemplate::new("architecture-machine", "Architecture de von Neumann"),
            SkillTemplate::new("systeme-exploitation", "Systèmes d'exploitation et ligne de commande"),
            SkillTemplate::new("web-http", "Interactions client-serveur et HTTP"),
        ],
    );
    skills.insert(
        "algorithmics",
        vec![
            SkillTemplate::supporting("parcours-sequentiels", "Parcours séquentiels et recherche"),
            SkillTemplate::new("dichotomie", "Recherche dichotomique"),
            SkillTemplate::core("tris", "Tris par insertion et par sélection"),
            SkillTemplate::new("algorithmes-gloutons", "Algorithmes gloutons"),
        ],
    );

    let chapters = vec![
        chapter(
            "ch-n1-python",
            "Bases de Python",
            "Variables, types de base et expressions.",
            "programming",
            &["python-bases"],
        ),
        chapter(
            "ch-n1-fonctions",
            "Fonctions",
            "Définition, appel, spécification et tests.",
            "programming",
            &["fonctions", "modules-bibliotheques"],
        ),
        chapter(
            "ch-n1-types-construits",
            "Types construits",
            "P-uplets, listes en compréhension et dictionnaires.",
            "data",
            &["types-construits"],
        ),
        chapter(
            "ch-n1-tables",
            "Données en tables",
            "Indexation, recherche, tri et fusion de tables.",
            "data",
            &["traitement-tables"],
        ),
        chapter(
            "ch-n1-binaire",
            "Représentation binaire",
            "Bases 2 et 16, entiers relatifs et flottants.",
            "data",
            &["representation-binaire"],
        ),
        chapter(
            "ch-n1-architecture",
            "Architecture et systèmes",
            "Modèle de von Neumann et commandes Unix.",
            "systems",
            &["architecture-machine", "systeme-exploitation"],
        ),
        chapter(
            "ch-n1-web",
            "Interactions web",
            "Requêtes HTTP, formulaires et modèle client-serveur.",
            "systems",
            &["web-http"],
        ),
        chapter(
            "ch-n1-algorithmes",
            "Algorithmes de référence",
            "Parcours, recherche dichotomique et coût.",
            "algorithmics",
            &["parcours-sequentiels", "dichotomie"],
        ),
        chapter(
            "ch-n1-tris",
            "Tris et gloutons",
            "Tris quadratiques et stratégies gloutonnes.",
            "algorithmics",
            &["tris", "algorithmes-gloutons"],
        ),
    ];

    DiagnosticDefinition {
        key: "nsi-premiere-p2",
        version: "2024.2",
        label: "Diagnostic NSI Première",
        track: Track::Nsi,
        level: Level::Premiere,
        stage: DIAGNOSTIC_STAGE,
        skills,
        chapters,
        scoring_policy: policy(
            &[
                ("programming", 0.35),
                ("data", 0.25),
                ("systems", 0.15),
                ("algorithmics", 0.25),
            ],
            tiers(65.0, 35.0, 45.0, 55.0),
        ),
    }
}

pub(super) fn terminale() -> DiagnosticDefinition {
    let mut skills = BTreeMap::new();
    skills.insert(
        "programming",
        vec![
            SkillTemplate::core("recursivite", "Récursivité"),
            SkillTemplate::core("programmation-objet", "Programmation orientée objet"),
            SkillTemplate::new("modularite-tests", "Modularité et mise au point"),
        ],
    );
    skills.insert(
        "data",
        vec![
            SkillTemplate::core("modele-relationnel", "Modèle relationnel"),
            SkillTemplate::supporting("langage-sql", "Requêtes SQL"),
            SkillTemplate::new("integrite-concurrence", "Intégrité et accès concurrents"),
        ],
    );
    skills.insert(
        "systems",
        vec![
            SkillTemplate::new("processus-ordonnancement", "Processus et ordonnancement"),
            SkillTemplate::new("routage-reseaux", "Protocoles de routage"),
            SkillTemplate::new("securisation-communications", "Sécurisation des communications"),
        ],
    );
    skills.insert(
        "algorithmics",
        vec![
            SkillTemplate::core("structures-lineaires", "Listes, piles et files"),
            SkillTemplate::core("arbres-binaires", "Arbres binaires de recherche"),
            SkillTemplate::new("graphes", "Graphes et parcours"),
            SkillTemplate::new("diviser-regner", "Méthode diviser pour régner"),
        ],
    );

    let chapters = vec![
        chapter(
            "ch-nt-recursivite",
            "Récursivité",
            "Appels récursifs, cas de base et terminaison.",
            "programming",
            &["recursivite"],
        ),
        chapter(
            "ch-nt-poo",
            "Programmation objet",
            "Classes, attributs, méthodes et interfaces.",
            "programming",
            &["programmation-objet", "modularite-tests"],
        ),
        chapter(
            "ch-nt-bases-donnees",
            "Bases de données",
            "Modèle relationnel, SQL et transactions.",
            "data",
            &["modele-relationnel", "langage-sql", "integrite-concurrence"],
        ),
        chapter(
            "ch-nt-processus",
            "Gestion des processus",
            "États d'un processus et ordonnancement.",
            "systems",
            &["processus-ordonnancement"],
        ),
        chapter(
            "ch-nt-reseaux",
            "Réseaux et sécurité",
            "Routage, chiffrement et protocoles sécurisés.",
            "systems",
            &["routage-reseaux", "securisation-communications"],
        ),
        chapter(
            "ch-nt-structures",
            "Structures linéaires",
            "Listes chaînées, piles, files et interfaces.",
            "algorithmics",
            &["structures-lineaires"],
        ),
        chapter(
            "ch-nt-arbres",
            "Arbres binaires",
            "Parcours d'arbres et arbres binaires de recherche.",
            "algorithmics",
            &["arbres-binaires"],
        ),
        chapter(
            "ch-nt-graphes",
            "Graphes et stratégies",
            "Parcours de graphes et diviser pour régner.",
            "algorithmics",
            &["graphes", "diviser-regner"],
        ),
    ];

    DiagnosticDefinition {
        key: "nsi-terminale-p2",
        version: "2024.2",
        label: "Diagnostic NSI Terminale",
        track: Track::Nsi,
        level: Level::Terminale,
        stage: DIAGNOSTIC_STAGE,
        skills,
        chapters,
        scoring_policy: policy(
            &[
                ("programming", 0.30),
                ("data", 0.25),
                ("systems", 0.15),
                ("algorithmics", 0.30),
            ],
            tiers(70.0, 30.0, 50.0, 50.0),
        ),
    }
}
