use super::{
    ExperienceItem, MetricItem, PortfolioContent, Profile, ProjectItem, SkillCategory,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn metric(value: &str, description: &str, context: &str) -> MetricItem {
    MetricItem {
        value: value.to_owned(),
        description: description.to_owned(),
        context: context.to_owned(),
    }
}

fn project(title: &str, description: &str, technologies: &[&str]) -> ProjectItem {
    ProjectItem {
        title: title.to_owned(),
        description: description.to_owned(),
        technologies: strings(technologies),
    }
}

fn experience(
    role: &str,
    company: &str,
    location: &str,
    period: &str,
    tags: &[&str],
    achievements: &[&str],
) -> ExperienceItem {
    ExperienceItem {
        role: role.to_owned(),
        company: company.to_owned(),
        location: location.to_owned(),
        period: period.to_owned(),
        tags: strings(tags),
        achievements: strings(achievements),
    }
}

fn skill_category(category: &str, skills: &[&str]) -> SkillCategory {
    SkillCategory {
        category: category.to_owned(),
        skills: strings(skills),
    }
}

pub(super) fn content() -> PortfolioContent {
    PortfolioContent {
        profile: Profile {
            name: "Mohammed Kanchwala".to_owned(),
            title: "Software Engineer III".to_owned(),
            location: "Glasgow, United Kingdom".to_owned(),
            email: "mohammed.kanchwala@outlook.com".to_owned(),
            github: "https://github.com/mohammed-kanchwala".to_owned(),
            linkedin: "https://www.linkedin.com/in/mohammed-kanchwala-94256399".to_owned(),
            summary: "Software Engineer III with over 11 years of experience in developing, \
                      optimizing, and maintaining complex software solutions, particularly in \
                      fintech and cloud computing. Expertise in full-stack development with a \
                      strong focus on Java, Spring Boot, Angular, and AWS. Proven track record \
                      in leading cross-functional teams, driving scalability improvements, and \
                      ensuring system security and performance."
                .to_owned(),
        },
        metrics: vec![
            metric(
                "35%",
                "Reduction in loading/processing time",
                "Optimized online banking platform performance",
            ),
            metric(
                "15%",
                "Increase in user engagement",
                "Defined technical requirements for new features",
            ),
            metric(
                "20%",
                "Enhanced customer protection",
                "Integrated new security protocols against cyber threats",
            ),
            metric(
                "50k+",
                "Clients migrated with zero downtime",
                "Spearheaded seamless database migration",
            ),
            metric(
                "40%",
                "Payment system efficiency boost",
                "Integrated Apple Pay & Google Pay",
            ),
            metric(
                "65%",
                "Increase in platform scalability",
                "Developed new solutions (Best Agile Squad award)",
            ),
        ],
        projects: vec![
            project(
                "Secure Payment Gateway",
                "A high-performance microservices-based payment gateway designed for \
                 scalability and security. Handled high-concurrency transactions with \
                 reduced latency.",
                &["Java", "Spring Boot", "Redis", "Microservices", "Security"],
            ),
            project(
                "Terminal Operations Dashboard",
                "Real-time dashboard for monitoring port terminal operations, container \
                 movements, and resource allocation. Reduced manual tracking efforts \
                 significantly.",
                &["React", "TypeScript", "WebSocket", "Docker", "Java"],
            ),
            project(
                "Legacy System Cloud Migration",
                "Infrastructure as Code (IaC) implementation to migrate on-premise \
                 monolithic applications to AWS Cloud using containerization strategies.",
                &["AWS", "Terraform", "Docker", "Kubernetes", "Jenkins"],
            ),
            project(
                "OAuth2 Authorization Server",
                "Centralized identity management system implementing OAuth2 and OpenID \
                 Connect for secure authentication across multiple internal banking \
                 applications.",
                &["Java", "Security", "PostgreSQL", "OAuth2", "Spring Boot"],
            ),
        ],
        experience: vec![
            experience(
                "Software Engineer III",
                "JPMorgan Chase",
                "Glasgow, UK",
                "November 2022 - Present",
                &["Java", "Spring Boot", "AWS", "Security", "Microservices", "React", "Database"],
                &[
                    "Led efforts to optimize the performance and scalability of the online \
                     banking platform, achieving a 35% reduction in loading / processing time.",
                    "Collaborated with product managers and business analysts to define \
                     technical requirements for new features, resulting in a 15% increase in \
                     user engagement.",
                    "Integrated new security protocols and technologies, enhancing customer \
                     protection against cyber threats by 20%.",
                    "Spearheaded a seamless database migration that maintained business \
                     continuity, preventing any downtime during migration for 50000+ clients.",
                ],
            ),
            experience(
                "Software Developer",
                "DP World",
                "Dubai, UAE",
                "April 2020 - November 2022",
                &["Java", "Integration", "Microservices", "Docker", "Agile/Scrum"],
                &[
                    "Improved efficiency in port operations by enhancing a terminal operating \
                     system, reducing operational delays by 25%.",
                    "Developed and deployed a multi-system integration platform that \
                     centralized key terminal operations, cutting down on manual inputs by 40%.",
                    "Led a team through the end-to-end software delivery process, from \
                     requirements gathering to deployment, consistently meeting deadlines.",
                    "Implemented key software updates that boosted system reliability and \
                     performance, decreasing downtime by 15%.",
                ],
            ),
            experience(
                "Software Developer",
                "Nagarro Middle East",
                "Dubai, UAE",
                "February 2017 - March 2020",
                &["Java", "Spring Boot", "Mobile Payments", "Agile/Scrum", "Support"],
                &[
                    "Contributed to the development of major banking features, including Apple \
                     Pay and Google Pay, enhancing payment system efficiency by 40%.",
                    "Managed the full application lifecycle, including production support, \
                     improving overall system stability and reducing support ticket volumes \
                     by 30%.",
                    "Led a team that developed new solutions, increasing platform scalability \
                     by 65%, and was recognized with the Best Agile Squad award.",
                ],
            ),
            experience(
                "Software Developer",
                "Gatesoft Solutions",
                "Ahmedabad, India",
                "September 2014 - February 2017",
                &["Java", "JavaScript", "HTML/CSS", "Security", "SQL"],
                &[
                    "Worked as a full-stack developer, designing and implementing software \
                     solutions that enhanced user experience and security.",
                    "Managed session control and security features, which resulted in a 20% \
                     improvement in system security.",
                    "Led the release management process for multiple features, ensuring smooth \
                     deployment without disruptions.",
                ],
            ),
        ],
        skills: vec![
            skill_category(
                "Core & Frontend",
                &["Java", "JavaScript", "React", "Angular", "HTML/CSS"],
            ),
            skill_category(
                "Backend & Database",
                &[
                    "Spring Boot",
                    "Node.js",
                    "MongoDB",
                    "Cassandra",
                    "Redis",
                    "MS-SQL",
                    "PostgreSQL",
                    "Oracle DB",
                    "MySQL",
                ],
            ),
            skill_category(
                "DevOps & Cloud",
                &[
                    "AWS",
                    "Docker",
                    "Kubernetes",
                    "Jenkins",
                    "Terraform",
                    "Dynatrace",
                    "Maven",
                    "Gradle",
                ],
            ),
            skill_category(
                "Practices & Tools",
                &[
                    "Agile/Scrum",
                    "TDD",
                    "JUnit",
                    "Jira",
                    "Confluence",
                    "Apache Spark",
                    "Microservices",
                    "Data Structures & Algorithms",
                ],
            ),
        ],
        cross_links: vec![
            ("Java".to_owned(), "Spring Boot".to_owned()),
            ("React".to_owned(), "JavaScript".to_owned()),
            ("AWS".to_owned(), "Docker".to_owned()),
            ("Microservices".to_owned(), "Docker".to_owned()),
            ("Spring Boot".to_owned(), "Microservices".to_owned()),
            ("TDD".to_owned(), "JUnit".to_owned()),
            ("Angular".to_owned(), "JavaScript".to_owned()),
            ("HTML/CSS".to_owned(), "JavaScript".to_owned()),
        ],
    }
}
