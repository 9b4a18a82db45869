use crate::output::print_json;
use serde::Serialize;

#[derive(Serialize)]
struct AboutSection {
    heading: &'static str,
    content: &'static str,
}

#[derive(Serialize)]
struct About {
    title: &'static str,
    subtitle: &'static str,
    sections: &'static [AboutSection],
}

static ABOUT: About = About {
    title: "About Team Hub & Massalati's Theory",
    subtitle: "A new framework for a new generation of work.",
    sections: &[
        AboutSection {
            heading: "WHY A NEW MANAGEMENT THEORY IS NEEDED",
            content: "Traditional management models were designed for the industrial age—think factory lines and top-down control. Theories like Taylorism emphasized efficiency through rigid processes and strict hierarchies. While effective for repetitive tasks, these models clash with the needs of modern knowledge work and a new generation of talent. \n\nFor Gen Z, this friction leads to burnout, disengagement, and a lack of autonomy. The old \"carrot-and-stick\" approach to motivation is no longer enough. We need a system built on trust, purpose, and freedom, not just control and compliance.",
        },
        AboutSection {
            heading: "WHAT MASSALATI’S THEORY IS",
            content: "Massalati’s Theory is a management framework designed to replace outdated control mechanisms with principles of freedom and engagement. It recognizes that today's greatest asset is individual talent, which thrives in an environment of trust and autonomy. \n\nThe core idea is simple: manage the work, not the worker. By focusing on outcomes and creating the right conditions for success, teams become more innovative, resilient, and motivated.",
        },
        AboutSection {
            heading: "THE SIX PILLARS",
            content: "1. Freedom – Granting team members autonomy over how they approach their tasks. \n2. Flexibility – Allowing choice over when and where work gets done. \n3. Comfortable Environment – Fostering psychological safety where people can experiment without fear. \n4. Payment by Done Tasks – Measuring value by results, not hours. \n5. General Engagement – Connecting work to a meaningful mission. \n6. Alternativity (Choice) – Giving people options in tasks, tools, and growth paths.",
        },
        AboutSection {
            heading: "HOW IT REPLACES OLD MANAGEMENT",
            content: "Instead of supervision and pressure, it relies on clarity and context. Instead of enforcing rules, it establishes principles. The manager becomes a coach and a barrier-remover, not a controller.",
        },
        AboutSection {
            heading: "WHY IT FITS GEN Z",
            content: "Gen Z values purpose, balance, authenticity, and fast feedback. The six pillars directly support these values.",
        },
        AboutSection {
            heading: "HOW THIS APP APPLIES THE THEORY",
            content: "Team Hub creates transparent team profiles that define how a team works and what drives it. This clarity builds trust and enables freedom, flexibility, and engagement in real practice.",
        },
        AboutSection {
            heading: "THE MAIN GOAL",
            content: "To build high-performing teams that are sustainable, motivating, and human-centered.",
        },
    ],
};

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&ABOUT);
    }

    println!("{}", ABOUT.title);
    println!("{}", ABOUT.subtitle);
    for section in ABOUT.sections {
        println!();
        println!("{}", section.heading);
        for line in section.content.lines().map(str::trim_end) {
            if line.is_empty() {
                println!();
            } else {
                println!("  {line}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_keeps_every_section() {
        let headings: Vec<&str> = ABOUT.sections.iter().map(|s| s.heading).collect();
        assert_eq!(
            headings,
            [
                "WHY A NEW MANAGEMENT THEORY IS NEEDED",
                "WHAT MASSALATI’S THEORY IS",
                "THE SIX PILLARS",
                "HOW IT REPLACES OLD MANAGEMENT",
                "WHY IT FITS GEN Z",
                "HOW THIS APP APPLIES THE THEORY",
                "THE MAIN GOAL",
            ]
        );
        assert!(ABOUT.sections[2].content.contains("6. Alternativity (Choice)"));
        assert_eq!(
            ABOUT.sections[6].content,
            "To build high-performing teams that are sustainable, motivating, and human-centered."
        );
    }
}
