//! Registries of programmatic-SEO job pages.
//!
//! Two independent registries share the [`JobRecord`] shape: the keyword
//! database behind `/resume-keywords/{slug}` and the examples database
//! behind `/examples/{slug}`. Slugs are unique within a registry but may
//! repeat across registries — the derived paths live under different
//! prefixes, so no URL collision results.

use crate::types::JobRecord;

use super::date;

/// An ordered registry of job records.
///
/// Construct the curated databases with [`JobRegistry::keywords`] and
/// [`JobRegistry::examples`], or build a fixture with
/// [`JobRegistry::from_entries`].
pub struct JobRegistry {
    entries: Vec<JobRecord>,
}

impl JobRegistry {
    /// The curated job keyword database.
    ///
    /// Each record carries the ATS keywords surfaced on its page. Keyword
    /// text is authored content and is not validated here.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn keywords() -> Self {
        let entries = vec![
            JobRecord::new("Accountant", "accountant", 0.8)
                .with_lastmod(date(2026, 6, 18))
                .with_keywords(&[
                    "general ledger",
                    "accounts payable",
                    "GAAP",
                    "month-end close",
                    "reconciliation",
                    "QuickBooks",
                ]),
            JobRecord::new("Administrative Assistant", "administrative-assistant", 0.8)
                .with_keywords(&[
                    "calendar management",
                    "travel coordination",
                    "Microsoft Office",
                    "expense reports",
                    "meeting minutes",
                ]),
            JobRecord::new("Account Manager", "account-manager", 0.7).with_keywords(&[
                "client retention",
                "upselling",
                "CRM",
                "quarterly business reviews",
                "pipeline management",
            ]),
            JobRecord::new("Business Analyst", "business-analyst", 0.7).with_keywords(&[
                "requirements gathering",
                "stakeholder management",
                "SQL",
                "process mapping",
                "user stories",
                "gap analysis",
            ]),
            JobRecord::new(
                "Customer Service Representative",
                "customer-service-representative",
                0.8,
            )
            .with_keywords(&[
                "conflict resolution",
                "ticketing systems",
                "first-call resolution",
                "Zendesk",
                "customer satisfaction",
            ]),
            JobRecord::new("Cybersecurity Analyst", "cybersecurity-analyst", 0.7)
                .with_lastmod(date(2026, 7, 2))
                .with_keywords(&[
                    "SIEM",
                    "incident response",
                    "threat hunting",
                    "vulnerability assessment",
                    "NIST framework",
                ]),
            JobRecord::new("Data Analyst", "data-analyst", 0.8).with_keywords(&[
                "SQL",
                "Tableau",
                "data visualization",
                "A/B testing",
                "Python",
                "dashboard design",
            ]),
            JobRecord::new("Data Scientist", "data-scientist", 0.7).with_keywords(&[
                "machine learning",
                "Python",
                "statistical modeling",
                "feature engineering",
                "TensorFlow",
            ]),
            JobRecord::new("Dental Assistant", "dental-assistant", 0.6).with_keywords(&[
                "chairside assisting",
                "radiographs",
                "sterilization",
                "patient scheduling",
                "HIPAA compliance",
            ]),
            JobRecord::new("DevOps Engineer", "devops-engineer", 0.7).with_keywords(&[
                "CI/CD",
                "Kubernetes",
                "Terraform",
                "infrastructure as code",
                "AWS",
                "observability",
            ]),
            JobRecord::new(
                "Digital Marketing Specialist",
                "digital-marketing-specialist",
                0.7,
            )
            .with_keywords(&[
                "SEO",
                "Google Analytics",
                "paid social",
                "conversion rate optimization",
                "email campaigns",
            ]),
            JobRecord::new("Electrical Engineer", "electrical-engineer", 0.6).with_keywords(&[
                "circuit design",
                "PCB layout",
                "AutoCAD",
                "power distribution",
                "NEC code",
            ]),
            JobRecord::new("Executive Assistant", "executive-assistant", 0.7).with_keywords(&[
                "C-suite support",
                "board meeting preparation",
                "confidentiality",
                "travel logistics",
                "gatekeeping",
            ]),
            JobRecord::new("Financial Analyst", "financial-analyst", 0.7).with_keywords(&[
                "financial modeling",
                "variance analysis",
                "forecasting",
                "Excel",
                "DCF valuation",
            ]),
            JobRecord::new("Graphic Designer", "graphic-designer", 0.7).with_keywords(&[
                "Adobe Creative Suite",
                "brand identity",
                "typography",
                "Figma",
                "print production",
            ]),
            JobRecord::new("Human Resources Manager", "human-resources-manager", 0.7)
                .with_keywords(&[
                    "talent acquisition",
                    "employee relations",
                    "HRIS",
                    "performance management",
                    "onboarding",
                ]),
            JobRecord::new("Marketing Manager", "marketing-manager", 0.8)
                .with_lastmod(date(2026, 6, 25))
                .with_keywords(&[
                    "campaign management",
                    "brand positioning",
                    "marketing automation",
                    "budget ownership",
                    "go-to-market strategy",
                ]),
            JobRecord::new("Mechanical Engineer", "mechanical-engineer", 0.6).with_keywords(&[
                "SolidWorks",
                "FEA",
                "GD&T",
                "prototyping",
                "design for manufacturing",
            ]),
            JobRecord::new("Medical Assistant", "medical-assistant", 0.7).with_keywords(&[
                "vital signs",
                "EHR",
                "phlebotomy",
                "patient intake",
                "medical terminology",
            ]),
            JobRecord::new("Nurse Practitioner", "nurse-practitioner", 0.6).with_keywords(&[
                "patient assessment",
                "prescriptive authority",
                "chronic disease management",
                "care plans",
                "telehealth",
            ]),
            JobRecord::new("Office Manager", "office-manager", 0.7).with_keywords(&[
                "vendor management",
                "facilities coordination",
                "budgeting",
                "supply procurement",
                "team scheduling",
            ]),
            JobRecord::new("Operations Manager", "operations-manager", 0.7).with_keywords(&[
                "process improvement",
                "KPI tracking",
                "lean six sigma",
                "cross-functional leadership",
                "capacity planning",
            ]),
            JobRecord::new("Paralegal", "paralegal", 0.6).with_keywords(&[
                "legal research",
                "discovery",
                "case management",
                "Westlaw",
                "document drafting",
            ]),
            JobRecord::new("Pharmacist", "pharmacist", 0.6).with_keywords(&[
                "medication therapy management",
                "dispensing accuracy",
                "drug interactions",
                "immunization",
                "inventory control",
            ]),
            JobRecord::new("Physical Therapist", "physical-therapist", 0.6).with_keywords(&[
                "treatment plans",
                "manual therapy",
                "gait training",
                "outcome measures",
                "patient education",
            ]),
            JobRecord::new("Product Manager", "product-manager", 0.8)
                .with_lastmod(date(2026, 7, 10))
                .with_keywords(&[
                    "product roadmap",
                    "user research",
                    "prioritization",
                    "OKRs",
                    "stakeholder alignment",
                    "agile",
                ]),
            JobRecord::new("Project Manager", "project-manager", 0.8).with_keywords(&[
                "PMP",
                "risk management",
                "Gantt charts",
                "scope control",
                "agile",
                "budget tracking",
            ]),
            JobRecord::new("Receptionist", "receptionist", 0.7).with_keywords(&[
                "front desk operations",
                "multi-line phones",
                "visitor management",
                "appointment scheduling",
                "data entry",
            ]),
            JobRecord::new("Registered Nurse", "registered-nurse", 0.8)
                .with_lastmod(date(2026, 6, 12))
                .with_keywords(&[
                    "patient care",
                    "medication administration",
                    "care coordination",
                    "BLS certification",
                    "charting",
                    "triage",
                ]),
            JobRecord::new("Retail Sales Associate", "retail-sales-associate", 0.7)
                .with_keywords(&[
                    "POS systems",
                    "merchandising",
                    "loss prevention",
                    "upselling",
                    "inventory counts",
                ]),
            JobRecord::new("Sales Manager", "sales-manager", 0.7).with_keywords(&[
                "quota attainment",
                "territory planning",
                "coaching",
                "Salesforce",
                "forecast accuracy",
            ]),
            JobRecord::new("Scrum Master", "scrum-master", 0.6).with_keywords(&[
                "sprint planning",
                "retrospectives",
                "impediment removal",
                "velocity tracking",
                "servant leadership",
            ]),
            JobRecord::new("Social Media Manager", "social-media-manager", 0.7).with_keywords(&[
                "content calendar",
                "community management",
                "engagement metrics",
                "influencer outreach",
                "paid amplification",
            ]),
            JobRecord::new("Software Engineer", "software-engineer", 0.8)
                .with_lastmod(date(2026, 7, 15))
                .with_keywords(&[
                    "distributed systems",
                    "code review",
                    "microservices",
                    "REST APIs",
                    "unit testing",
                    "CI/CD",
                ]),
            JobRecord::new("Supply Chain Manager", "supply-chain-manager", 0.6).with_keywords(&[
                "demand planning",
                "logistics",
                "supplier negotiation",
                "ERP systems",
                "inventory optimization",
            ]),
            JobRecord::new("Teacher", "teacher", 0.7).with_keywords(&[
                "lesson planning",
                "classroom management",
                "differentiated instruction",
                "IEP",
                "student assessment",
            ]),
            JobRecord::new("Truck Driver", "truck-driver", 0.6).with_keywords(&[
                "CDL Class A",
                "DOT compliance",
                "route planning",
                "electronic logging",
                "pre-trip inspection",
            ]),
            JobRecord::new("UX Designer", "ux-designer", 0.7).with_keywords(&[
                "user research",
                "wireframing",
                "usability testing",
                "Figma",
                "design systems",
                "information architecture",
            ]),
            JobRecord::new("Warehouse Worker", "warehouse-worker", 0.6).with_keywords(&[
                "forklift certified",
                "order picking",
                "RF scanners",
                "safety compliance",
                "shipping and receiving",
            ]),
            JobRecord::new("Web Developer", "web-developer", 0.7).with_keywords(&[
                "JavaScript",
                "responsive design",
                "React",
                "accessibility",
                "performance optimization",
            ]),
        ];

        Self { entries }
    }

    /// The curated job examples database.
    #[must_use]
    pub fn examples() -> Self {
        let entries = vec![
            JobRecord::new("Software Engineer", "software-engineer", 0.7)
                .with_lastmod(date(2026, 7, 6)),
            JobRecord::new("Registered Nurse", "registered-nurse", 0.7)
                .with_lastmod(date(2026, 6, 22)),
            JobRecord::new("Project Manager", "project-manager", 0.7),
            JobRecord::new("Data Analyst", "data-analyst", 0.7),
            JobRecord::new("Marketing Manager", "marketing-manager", 0.7),
            JobRecord::new(
                "Customer Service Representative",
                "customer-service-representative",
                0.7,
            ),
            JobRecord::new("Administrative Assistant", "administrative-assistant", 0.7),
            JobRecord::new("Accountant", "accountant", 0.7),
            JobRecord::new("Sales Representative", "sales-representative", 0.7),
            JobRecord::new("Graphic Designer", "graphic-designer", 0.6),
            JobRecord::new("Product Manager", "product-manager", 0.7)
                .with_lastmod(date(2026, 7, 6)),
            JobRecord::new("Teacher", "teacher", 0.7),
            JobRecord::new("Electrician", "electrician", 0.6),
            JobRecord::new("Bartender", "bartender", 0.6),
            JobRecord::new("Server", "server", 0.6),
            JobRecord::new("Cashier", "cashier", 0.6),
            JobRecord::new("Security Guard", "security-guard", 0.6),
            JobRecord::new("Bookkeeper", "bookkeeper", 0.6),
            JobRecord::new("Office Assistant", "office-assistant", 0.6),
            JobRecord::new("College Student", "college-student", 0.6),
            JobRecord::new("High School Student", "high-school-student", 0.6),
            JobRecord::new("Career Change", "career-change", 0.6).with_lastmod(date(2026, 5, 28)),
        ];

        Self { entries }
    }

    /// Build a registry from explicit entries (used by tests and tooling).
    #[must_use]
    pub fn from_entries(entries: Vec<JobRecord>) -> Self {
        Self { entries }
    }

    /// All entries, in registry order.
    #[must_use]
    pub fn entries(&self) -> &[JobRecord] {
        &self.entries
    }

    /// All slugs, in registry order.
    #[must_use]
    pub fn slugs(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.slug.as_str()).collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
