use crate::role::Role;
use crate::types::Amount;
use serde::{Deserialize, Serialize};

/// Pay parameters for a single role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleRules {
    pub role: Role,
    /// Assigned at hire time, never recomputed.
    pub base_salary: Amount,
    /// Ceiling on the tenure bonus, in percentage points.
    pub max_percentage: f64,
    /// Fractional uplift per full year worked.
    pub year_bonus: f64,
    /// Share of the subordinate salary sum paid as a bonus.
    /// Ignored for roles whose scope is `SubordinateScope::None`.
    #[serde(default)]
    pub subordinate_rate: f64,
}

impl RoleRules {
    /// min(years × year_bonus, max_percentage / 100)
    pub fn tenure_fraction(&self, years_worked: u32) -> f64 {
        (years_worked as f64 * self.year_bonus).min(self.max_percentage / 100.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RolesFile {
    roles: Vec<RoleRules>,
}

/// Process-wide role tables. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayRules {
    pub employee: RoleRules,
    pub manager:  RoleRules,
    pub sales:    RoleRules,
}

impl PayRules {
    /// Load from `{data_dir}/roles.json`.
    /// Every role must appear exactly once.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/roles.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content).map_err(|e| anyhow::anyhow!("Invalid {path}: {e}"))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let file: RolesFile = serde_json::from_str(content)?;

        for rules in &file.roles {
            if rules.base_salary < 0.0
                || rules.max_percentage < 0.0
                || rules.year_bonus < 0.0
                || rules.subordinate_rate < 0.0
            {
                anyhow::bail!("negative pay parameter for role {}", rules.role);
            }
        }

        let pick = |role: Role| -> anyhow::Result<RoleRules> {
            let mut matching = file.roles.iter().filter(|r| r.role == role);
            let found = matching
                .next()
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("missing rules for role {role}"))?;
            if matching.next().is_some() {
                anyhow::bail!("duplicate rules for role {role}");
            }
            Ok(found)
        };

        Ok(Self {
            employee: pick(Role::Employee)?,
            manager:  pick(Role::Manager)?,
            sales:    pick(Role::Sales)?,
        })
    }

    pub fn for_role(&self, role: Role) -> &RoleRules {
        match role {
            Role::Employee => &self.employee,
            Role::Manager  => &self.manager,
            Role::Sales    => &self.sales,
        }
    }

    pub fn base_salary(&self, role: Role) -> Amount {
        self.for_role(role).base_salary
    }
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            employee: RoleRules {
                role: Role::Employee,
                base_salary: 40_000.0,
                max_percentage: 30.0,
                year_bonus: 0.03,
                subordinate_rate: 0.0,
            },
            manager: RoleRules {
                role: Role::Manager,
                base_salary: 60_000.0,
                max_percentage: 40.0,
                year_bonus: 0.05,
                subordinate_rate: 0.005,
            },
            sales: RoleRules {
                role: Role::Sales,
                base_salary: 50_000.0,
                max_percentage: 35.0,
                year_bonus: 0.01,
                subordinate_rate: 0.003,
            },
        }
    }
}
