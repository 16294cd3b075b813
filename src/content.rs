use serde::Serialize;

use crate::sections::IconToken;

/// Serializes to the schema.org `Person` properties it maps onto.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    #[serde(rename = "jobTitle")]
    pub tagline: &'static str,
    /// Shown when the avatar image can't be loaded.
    #[serde(skip)]
    pub initials: &'static str,
    #[serde(rename = "image")]
    pub avatar: &'static str,
    #[serde(skip)]
    pub location: &'static str,
    #[serde(skip)]
    pub about: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub role: &'static str,
    pub organization: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename = "EducationalOrganization")]
pub struct Education {
    #[serde(skip)]
    pub program: &'static str,
    #[serde(rename = "name")]
    pub institution: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename = "SoftwareSourceCode")]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "codeRepository")]
    pub repository: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    #[serde(skip)]
    pub icon: IconToken,
}

pub static PROFILE: Profile = Profile {
    name: "DavC",
    tagline: "Desarrollador Web | Diseñador UX | FullStack Web",
    initials: "TN",
    avatar: "/sho1.png",
    location: "Oaxaca de Juárez",
    about: &[
        "Soy estudiante de Ingeniería en Computación, apasionado por la tecnología y la programación. Disfruto trabajar en equipo y resolver problemas que afectan a la sociedad mediante el desarrollo de software que facilite la vida de los usuarios.",
        "Vivo en Oaxaca de Juárez, tengo 18 años y me gusta practicar deportes, dibujar y diseñar.",
    ],
};

pub static EXPERIENCE: [Experience; 2] = [
    Experience {
        role: "Desarrollador",
        organization: "Desarrollador Freelancer",
        highlights: &[
            "Desarrollo de aplicaciones web utilizando React, Node.js y SQL.",
            "Desarrollo de Proyectos Personales para Auto Aprendizaje.",
        ],
    },
    Experience {
        role: "Desarrollador Front-end",
        organization: "Designer",
        highlights: &[
            "Trabajos de Front-End en diseño de paginas web con tecnologias como Bootstrap, Tailwind CSS y Vite",
        ],
    },
];

pub static SKILLS: [&str; 10] = [
    "React",
    "Python",
    "C & C#",
    "SQL",
    "CSS",
    "Tailwind & Bootstrap",
    "JS",
    "Kotlin",
    "PHP",
    "PostgreSQL",
];

pub static EDUCATION: [Education; 2] = [
    Education {
        program: "Técnico en programación",
        institution: "Colegio de Estudios Científicos y Tecnológicos del Estado de Oaxaca",
        url: "https://www.cecyteo.edu.mx/Nova/Portal/Index",
    },
    Education {
        program: "Ingeniería en Computación",
        institution: "Universidad Tecnológica de la Mixteca",
        url: "https://www.utm.mx/",
    },
];

pub static PROJECTS: [Project; 5] = [
    Project {
        name: "FondoDv",
        description: "Programa para Windows realizado con C# y Windows Form + .NET, que permite al usuario cambiar el fondo de su pantalla de una manera más dinámica.",
        repository: "https://github.com/Davidcrz14/FondoDv",
    },
    Project {
        name: "Red Social",
        description: "Una red social de estilo foro que permite a los usuarios interactuar y compartir contenido. Diseñada para ofrecer una experiencia de usuario intuitiva y personalizada.",
        repository: "https://github.com/Davidcrz14/Red-Social",
    },
    Project {
        name: "BotD",
        description: "Bot de Discord diseñado para mejorar la experiencia del usuario en servidores mediante funcionalidades útiles y divertidas. Construido con discord.js.",
        repository: "https://github.com/Davidcrz14/botdiscord",
    },
    Project {
        name: "DavLoad",
        description: "Proyecto en Python para descargar videos de YouTube como audio o video, con una interfaz intuitiva para el usuario.",
        repository: "https://github.com/Davidcrz14/DavLoad",
    },
    Project {
        name: "Analizador de Pseudocódigo",
        description: "Analizador de pseudocódigo con IA utilizando el modelo de Gemini de Google.",
        repository: "https://github.com/Davidcrz14/code",
    },
];

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Davidcrz14",
        icon: IconToken::Github,
    },
    SocialLink {
        label: "Twitter",
        href: "https://x.com/programacionori",
        icon: IconToken::Twitter,
    },
    SocialLink {
        label: "Email",
        href: "mailto:cucd060823@gs.utm.mx",
        icon: IconToken::Mail,
    },
];

#[derive(Serialize)]
#[serde(tag = "@type", rename = "PostalAddress", rename_all = "camelCase")]
struct PostalAddress {
    address_locality: &'static str,
}

#[derive(Serialize)]
#[serde(tag = "@type", rename = "Person", rename_all = "camelCase")]
struct PersonLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(flatten)]
    profile: &'static Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'static str>,
    address: PostalAddress,
    same_as: Vec<&'static str>,
    alumni_of: &'static [Education],
    work_example: &'static [Project],
    knows_about: &'static [&'static str],
}

/// schema.org `Person` for the page head.
pub fn person_json_ld() -> serde_json::Result<serde_json::Value> {
    let same_as = SOCIAL_LINKS
        .iter()
        .filter(|l| l.href.starts_with("https://"))
        .map(|l| l.href)
        .collect();
    let email = SOCIAL_LINKS
        .iter()
        .find_map(|l| l.href.strip_prefix("mailto:"));
    serde_json::to_value(PersonLd {
        context: "https://schema.org",
        profile: &PROFILE,
        email,
        address: PostalAddress {
            address_locality: PROFILE.location,
        },
        same_as,
        alumni_of: &EDUCATION,
        work_example: &PROJECTS,
        knows_about: &SKILLS,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_skills_unique() {
        let unique = SKILLS.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), SKILLS.len());
    }

    #[test]
    fn test_initials_are_two_letters() {
        assert_eq!(PROFILE.initials.chars().count(), 2);
        assert!(PROFILE.initials.chars().all(char::is_uppercase));
    }

    #[test]
    fn test_links_are_absolute() {
        for p in &PROJECTS {
            assert!(p.repository.starts_with("https://github.com/"), "{}", p.name);
        }
        for l in &SOCIAL_LINKS {
            assert!(
                l.href.starts_with("https://") || l.href.starts_with("mailto:"),
                "{}",
                l.label
            );
        }
    }

    #[test]
    fn test_person_json_ld() {
        let v = person_json_ld().unwrap();
        assert_eq!(v["@context"], "https://schema.org");
        assert_eq!(v["@type"], "Person");
        assert_eq!(v["name"], PROFILE.name);
        assert_eq!(v["jobTitle"], PROFILE.tagline);
        assert_eq!(v["image"], PROFILE.avatar);
        assert_eq!(v["email"], "cucd060823@gs.utm.mx");
        assert_eq!(v["address"]["@type"], "PostalAddress");
        assert_eq!(v["address"]["addressLocality"], "Oaxaca de Juárez");
        assert_eq!(v["sameAs"].as_array().map(Vec::len), Some(2));
        assert_eq!(v["alumniOf"].as_array().map(Vec::len), Some(EDUCATION.len()));
        assert_eq!(v["alumniOf"][1]["@type"], "EducationalOrganization");
        assert_eq!(v["alumniOf"][1]["name"], "Universidad Tecnológica de la Mixteca");
        assert_eq!(v["workExample"].as_array().map(Vec::len), Some(PROJECTS.len()));
        assert_eq!(v["knowsAbout"].as_array().map(Vec::len), Some(SKILLS.len()));
        // page-only fields stay out of the markup
        assert!(v.get("initials").is_none());
        assert!(v.get("about").is_none());
        assert!(v.get("tagline").is_none());
    }

    #[test]
    fn test_content_serializes() {
        let project = serde_json::to_value(&PROJECTS[0]).unwrap();
        assert_eq!(project["@type"], "SoftwareSourceCode");
        assert_eq!(project["name"], "FondoDv");
        assert_eq!(project["codeRepository"], "https://github.com/Davidcrz14/FondoDv");

        let job = serde_json::to_value(&EXPERIENCE[1]).unwrap();
        assert_eq!(job["role"], "Desarrollador Front-end");
        assert_eq!(job["highlights"].as_array().map(Vec::len), Some(1));

        let link = serde_json::to_value(&SOCIAL_LINKS[2]).unwrap();
        assert_eq!(link["href"], "mailto:cucd060823@gs.utm.mx");
        assert!(link.get("icon").is_none());
    }
}
