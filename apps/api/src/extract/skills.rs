//! Skill keyword matching against a fixed vocabulary.
//!
//! Matching is substring-based: an entry counts as found if it appears
//! anywhere in the lower-cased text, including inside longer words. Single
//! letter entries like "r" and "c" therefore match very broadly; recall is
//! traded for precision on purpose, and downstream scoring only ever looks at
//! the intersection with a vacancy's stated requirements.

/// Fixed, lower-cased skill vocabulary. Unordered set semantics; no entry
/// appears twice.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "c",
    "ruby",
    "php",
    "go",
    "golang",
    "rust",
    "swift",
    "kotlin",
    "scala",
    "r",
    "matlab",
    "perl",
    "shell",
    "bash",
    "powershell",
    "vba",
    "objective-c",
    "dart",
    "elixir",
    "haskell",
    "lua",
    "groovy",
    // Web frontend
    "react",
    "angular",
    "vue",
    "vue.js",
    "svelte",
    "next.js",
    "nuxt.js",
    "html",
    "html5",
    "css",
    "css3",
    "sass",
    "scss",
    "less",
    "tailwind",
    "bootstrap",
    "material-ui",
    "chakra ui",
    "jquery",
    "webpack",
    "vite",
    "babel",
    "responsive design",
    "ui/ux",
    "figma",
    "sketch",
    // Backend & frameworks
    "node.js",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring",
    "spring boot",
    ".net",
    "asp.net",
    "laravel",
    "symfony",
    "rails",
    "ruby on rails",
    "gin",
    "echo",
    "nest.js",
    "koa",
    "strapi",
    // Databases
    "sql",
    "nosql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "cassandra",
    "elasticsearch",
    "oracle",
    "sql server",
    "mariadb",
    "dynamodb",
    "firebase",
    "couchdb",
    "neo4j",
    "influxdb",
    "sqlite",
    // DevOps & cloud
    "docker",
    "kubernetes",
    "k8s",
    "aws",
    "azure",
    "gcp",
    "google cloud",
    "heroku",
    "digital ocean",
    "terraform",
    "ansible",
    "jenkins",
    "gitlab ci",
    "github actions",
    "circleci",
    "travis ci",
    "ci/cd",
    "devops",
    "linux",
    "unix",
    "nginx",
    "apache",
    // Data science & ML
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "keras",
    "scikit-learn",
    "pandas",
    "numpy",
    "scipy",
    "matplotlib",
    "seaborn",
    "plotly",
    "data analysis",
    "data science",
    "statistics",
    "nlp",
    "computer vision",
    "opencv",
    "spacy",
    "nltk",
    "transformers",
    "bert",
    "gpt",
    "neural networks",
    "cnn",
    "rnn",
    "lstm",
    // Mobile development
    "android",
    "ios",
    "react native",
    "flutter",
    "xamarin",
    "ionic",
    "cordova",
    "swift ui",
    "jetpack compose",
    // Version control & tools
    "git",
    "github",
    "gitlab",
    "bitbucket",
    "svn",
    "mercurial",
    // Testing
    "unit testing",
    "integration testing",
    "pytest",
    "jest",
    "mocha",
    "selenium",
    "cypress",
    "junit",
    "testng",
    "jasmine",
    "karma",
    // APIs & architecture
    "rest api",
    "restful",
    "graphql",
    "soap",
    "grpc",
    "websocket",
    "microservices",
    "monolith",
    "event-driven",
    "serverless",
    "lambda",
    "api gateway",
    "message queue",
    "rabbitmq",
    "kafka",
    // Methodologies & practices
    "agile",
    "scrum",
    "kanban",
    "waterfall",
    "tdd",
    "bdd",
    "pair programming",
    "code review",
    "design patterns",
    "solid",
    // Project management & collaboration
    "jira",
    "confluence",
    "trello",
    "asana",
    "slack",
    "teams",
    "notion",
    "monday.com",
    // Security
    "oauth",
    "jwt",
    "ssl",
    "tls",
    "encryption",
    "security",
    "penetration testing",
    "owasp",
    // Other technologies
    "blockchain",
    "ethereum",
    "solidity",
    "web3",
    "smart contracts",
    "iot",
    "edge computing",
    "big data",
    "hadoop",
    "spark",
    "etl",
    "data warehouse",
    "power bi",
    "tableau",
    "looker",
    // Soft skills
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "critical thinking",
    "time management",
    "adaptability",
    // HR & recruitment
    "recruitment",
    "talent acquisition",
    "sourcing",
    "interviewing",
    "onboarding",
    "hr management",
    "applicant tracking",
    "ats",
    "linkedin recruiter",
    "boolean search",
    "candidate screening",
    "employer branding",
    "crm",
    "zoho",
    "hubspot",
    "greenhouse",
    "workday",
    "bamboohr",
    "performance management",
    // Business & management
    "project management",
    "product management",
    "business analysis",
    "stakeholder management",
    "budget management",
    "strategic planning",
    "kpi",
    "roi",
    "excel",
    "powerpoint",
    "word",
    "google sheets",
    "salesforce",
    "erp",
    "sap",
    "crm systems",
];

/// Vocabulary entries found in `text`, deduplicated, in vocabulary order.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| text_lower.contains(**skill))
        .map(|skill| skill.to_string())
        .collect()
}
