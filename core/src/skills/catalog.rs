//! Built-in skill metadata, keyed by agent name.
//!
//! Declaration order is the conversion order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillMetadata {
    pub name: &'static str,
    pub trigger_terms: &'static str,
    pub allowed_tools: &'static [&'static str],
}

/// Metadata resolved for a single agent, either from the catalog or synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetadata {
    pub trigger_terms: String,
    pub allowed_tools: Vec<String>,
}

pub const DEFAULT_ALLOWED_TOOLS: &[&str] = &["Read", "Write", "Bash", "Glob"];

pub const SKILL_METADATA: &[SkillMetadata] = &[
    SkillMetadata {
        name: "orchestrator",
        trigger_terms: "orchestrate, coordinate, multi-agent, workflow, execution plan, task breakdown, agent selection, project planning, complex task, full lifecycle, end-to-end development, comprehensive solution",
        allowed_tools: &["Read", "Write", "Edit", "Bash", "Glob", "Grep", "TodoWrite"],
    },
    SkillMetadata {
        name: "steering",
        trigger_terms: "steering, project memory, codebase analysis, auto-update context, generate steering, architecture patterns, tech stack analysis, project structure, analyze codebase, understand project",
        allowed_tools: &["Read", "Write", "Bash", "Glob", "Grep"],
    },
    SkillMetadata {
        name: "requirements-analyst",
        trigger_terms: "requirements, EARS format, user stories, functional requirements, non-functional requirements, SRS, requirement analysis, specification, acceptance criteria, requirement validation",
        allowed_tools: &["Read", "Write", "Edit", "Bash"],
    },
    SkillMetadata {
        name: "project-manager",
        trigger_terms: "project management, project plan, WBS, Gantt chart, risk management, sprint planning, milestone tracking, project timeline, resource allocation, stakeholder management",
        allowed_tools: &["Read", "Write", "Edit", "TodoWrite"],
    },
    SkillMetadata {
        name: "system-architect",
        trigger_terms: "architecture, system design, C4 model, ADR, architecture decision, design patterns, component design, architecture diagram, microservices, monolith, scalability",
        allowed_tools: &["Read", "Write", "Edit", "Bash", "Glob", "Grep"],
    },
    SkillMetadata {
        name: "api-designer",
        trigger_terms: "API design, REST API, GraphQL, OpenAPI, API specification, endpoint design, API contract, API documentation, gRPC, API versioning",
        allowed_tools: &["Read", "Write", "Edit", "Bash"],
    },
    SkillMetadata {
        name: "database-schema-designer",
        trigger_terms: "database design, schema design, ER diagram, normalization, DDL, database modeling, relational database, NoSQL design, data modeling, migration plan",
        allowed_tools: &["Read", "Write", "Edit", "Bash"],
    },
    SkillMetadata {
        name: "ui-ux-designer",
        trigger_terms: "UI design, UX design, wireframe, mockup, prototype, user interface, user experience, design system, component library, accessibility, responsive design",
        allowed_tools: &["Read", "Write", "Edit"],
    },
    SkillMetadata {
        name: "software-developer",
        trigger_terms: "implement, code, development, programming, coding, build feature, create function, write code, SOLID principles, clean code, refactor",
        allowed_tools: &["Read", "Write", "Edit", "Bash", "Glob", "Grep"],
    },
    SkillMetadata {
        name: "test-engineer",
        trigger_terms: "testing, unit tests, integration tests, E2E tests, test cases, test coverage, test automation, test plan, test design, TDD, test-first",
        allowed_tools: &["Read", "Write", "Edit", "Bash", "Glob", "Grep"],
    },
    SkillMetadata {
        name: "code-reviewer",
        trigger_terms: "code review, review code, code quality, best practices, SOLID principles, code smells, refactoring suggestions, code analysis, static analysis",
        allowed_tools: &["Read", "Grep", "Glob", "Bash"],
    },
    SkillMetadata {
        name: "bug-hunter",
        trigger_terms: "bug fix, debug, troubleshoot, root cause analysis, error investigation, fix bug, resolve issue, error analysis, stack trace",
        allowed_tools: &["Read", "Write", "Edit", "Bash", "Glob", "Grep"],
    },
    SkillMetadata {
        name: "quality-assurance",
        trigger_terms: "QA, quality assurance, test strategy, QA plan, quality metrics, test planning, quality gates, acceptance testing, regression testing",
        allowed_tools: &["Read", "Write", "Edit", "Bash"],
    },
    SkillMetadata {
        name: "security-auditor",
        trigger_terms: "security audit, vulnerability scan, OWASP, security analysis, penetration testing, security review, threat modeling, security best practices, CVE",
        allowed_tools: &["Read", "Grep", "Glob", "Bash"],
    },
    SkillMetadata {
        name: "performance-optimizer",
        trigger_terms: "performance optimization, performance tuning, profiling, benchmark, bottleneck analysis, scalability, latency optimization, memory optimization, query optimization",
        allowed_tools: &["Read", "Write", "Edit", "Bash", "Glob", "Grep"],
    },
    SkillMetadata {
        name: "devops-engineer",
        trigger_terms: "CI/CD, DevOps, pipeline, Docker, Kubernetes, deployment automation, containerization, infrastructure automation, GitHub Actions, GitLab CI",
        allowed_tools: &["Read", "Write", "Edit", "Bash", "Glob"],
    },
    SkillMetadata {
        name: "cloud-architect",
        trigger_terms: "cloud architecture, AWS, Azure, GCP, cloud infrastructure, IaC, Terraform, CloudFormation, cloud design, serverless, cloud migration",
        allowed_tools: &["Read", "Write", "Edit", "Bash"],
    },
    SkillMetadata {
        name: "database-administrator",
        trigger_terms: "database administration, DBA, database tuning, performance tuning, backup recovery, high availability, database monitoring, query optimization, index optimization",
        allowed_tools: &["Read", "Write", "Edit", "Bash", "Grep"],
    },
    SkillMetadata {
        name: "technical-writer",
        trigger_terms: "documentation, technical writing, API documentation, README, user guide, developer guide, tutorial, runbook, technical docs",
        allowed_tools: &["Read", "Write", "Edit", "Glob"],
    },
    SkillMetadata {
        name: "ai-ml-engineer",
        trigger_terms: "machine learning, ML, AI, model training, MLOps, model deployment, feature engineering, model evaluation, neural network, deep learning",
        allowed_tools: &["Read", "Write", "Edit", "Bash", "Glob", "Grep"],
    },
];

pub fn lookup(name: &str) -> Option<&'static SkillMetadata> {
    SKILL_METADATA.iter().find(|m| m.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    SKILL_METADATA.iter().map(|m| m.name)
}

/// Returns the catalog entry for `name`, or a default derived from the name itself.
pub fn metadata_for(name: &str) -> ResolvedMetadata {
    match lookup(name) {
        Some(meta) => ResolvedMetadata::from(meta),
        None => {
            tracing::debug!(name, "No catalog entry, using default metadata");
            ResolvedMetadata {
                trigger_terms: super::humanize(name),
                allowed_tools: DEFAULT_ALLOWED_TOOLS.iter().map(|t| t.to_string()).collect(),
            }
        }
    }
}

impl From<&SkillMetadata> for ResolvedMetadata {
    fn from(meta: &SkillMetadata) -> Self {
        Self {
            trigger_terms: meta.trigger_terms.to_string(),
            allowed_tools: meta.allowed_tools.iter().map(|t| t.to_string()).collect(),
        }
    }
}
