//! Lookup vocabularies shared by seeding and the demo client.

pub const FIRST_NAMES: &[&str] = &[
    "Jane", "Mark", "Olivia", "Ethan", "Sophia", "Liam", "Ava", "Noah", "Mia", "Lucas",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Davis", "Brown", "Garcia", "Miller", "Wilson", "Martinez", "Anderson",
    "Clark",
];

pub const DEPARTMENTS: &[&str] = &[
    "Finance",
    "HR & People",
    "Engineering",
    "Marketing",
    "Sales",
    "Operations",
];

pub const CATEGORIES: &[&str] = &[
    "Travel & Mileage",
    "Meals & Entertainment",
    "Office Supplies",
    "Training & Education",
    "Software & SaaS",
    "Lodging",
];

/// Description pools keyed by category, in the same order as [`CATEGORIES`].
pub const CATEGORY_DESCRIPTIONS: &[&[&str]] = &[
    &[
        "Mileage reimbursement for regional client visits",
        "Cab fare for airport transfer during client onsite",
        "Fuel expense submitted after sales road trip",
        "Ride-share to partner meeting downtown",
    ],
    &[
        "Team lunch with client account executives",
        "Customer dinner during product demo tour",
        "Event catering invoice for investor briefing",
        "Coffee meetup with channel partner",
    ],
    &[
        "Bulk stationery order for HQ workspace",
        "Printer ink cartridges for finance pod",
        "Whiteboard markers and notebooks restock",
        "Desk accessories purchase for new hires",
    ],
    &[
        "Conference registration fee for leadership summit",
        "Online course subscription for certifications",
        "Workshop materials for internal enablement",
        "Tuition reimbursement for professional development",
    ],
    &[
        "Monthly license renewal for analytics suite",
        "Productivity app subscription for marketing",
        "Security software upgrade and support",
        "Design tool seat assignment for creative team",
    ],
    &[
        "Hotel stay for cross-country sales visit",
        "Accommodation invoice for training week",
        "Business travel lodging near client HQ",
        "Extended stay for project deployment",
    ],
];

pub const PAYMENT_METHODS: &[&str] = &[
    "Corporate Card",
    "Personal Card",
    "Bank Transfer",
    "Cash Advance",
];

pub const CURRENCIES: &[&str] = &[
    "USD - US Dollar",
    "EUR - Euro",
    "GBP - Pound",
    "JPY - Yen",
];

pub const TAG_OPTIONS: &[&str] = &[
    "Urgent",
    "Client-Billable",
    "Non-Billable",
    "Conference",
    "Recurring",
    "Capital Expense",
];
