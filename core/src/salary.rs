//! Salary engine: role-dependent pay cascading through the reporting chain.
//!
//! salary = round_cents(base × (1 + tenure fraction) + subordinate bonus)
//!
//! The subordinate bonus depends on the role's scope:
//!   - EMPLOYEE:  none, the reporting chain is never read.
//!   - MANAGER:   rate × Σ salary of direct reports.
//!   - SALES:     rate × Σ salary of every transitive descendant.
//! Each report's salary is itself the full recursive computation.
//!
//! RULES:
//!   - The engine only reads, through StaffRepository.
//!   - Nothing survives between invocations. Within one invocation a memo
//!     avoids recomputing a member reached along several paths.
//!   - A supervisor cycle aborts the invocation with SupervisorCycle.

use crate::{
    config::PayRules,
    error::{RosterError, RosterResult},
    repository::StaffRepository,
    role::SubordinateScope,
    staff::StaffMember,
    tenure::years_worked,
    types::{Amount, StaffId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Round to whole cents, halves going up.
pub fn round_cents(amount: Amount) -> Amount {
    (amount * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryReport {
    pub status: String,
    pub salary: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalarySum {
    pub sum_salaries: Amount,
}

pub struct SalaryEngine<'a, R: StaffRepository> {
    repo:  &'a R,
    rules: &'a PayRules,
    as_of: NaiveDate,
}

impl<'a, R: StaffRepository> SalaryEngine<'a, R> {
    /// Engine evaluating tenure as of `as_of`.
    pub fn new(repo: &'a R, rules: &'a PayRules, as_of: NaiveDate) -> Self {
        Self { repo, rules, as_of }
    }

    /// Salary of the member with `id`. Fails with NotFound before any
    /// bonus computation if the id is unknown.
    pub fn member_salary(&self, id: StaffId) -> RosterResult<SalaryReport> {
        let member = self
            .repo
            .find_by_id(id)?
            .ok_or(RosterError::NotFound { id })?;

        let salary = self.salary_of(&member)?;

        Ok(SalaryReport {
            status: "OK".to_string(),
            salary,
        })
    }

    /// Σ salary_of(m) over every member of the roster, roots and reports
    /// alike. A report's salary is counted again inside its supervisor's
    /// bonus; no deduplication happens.
    pub fn sum_of_all_salaries(&self) -> RosterResult<SalarySum> {
        let members = self.repo.find_all()?;
        let mut run = Computation::new(self);

        let mut sum_salaries = 0.0;
        for member in &members {
            sum_salaries += run.salary_of(member)?;
        }

        log::info!(
            "salary sum over {} members as of {}: {sum_salaries:.2}",
            members.len(),
            self.as_of
        );
        Ok(SalarySum { sum_salaries })
    }

    pub fn salary_of(&self, member: &StaffMember) -> RosterResult<Amount> {
        Computation::new(self).salary_of(member)
    }

    pub fn subordinate_bonus_of(&self, member: &StaffMember) -> RosterResult<Amount> {
        let mut run = Computation::new(self);
        run.path.push(member.id);
        run.subordinate_bonus_of(member)
    }
}

/// State for a single invocation.
struct Computation<'e, 'a, R: StaffRepository> {
    engine: &'e SalaryEngine<'a, R>,
    memo:   HashMap<StaffId, Amount>,
    // Members whose salary is currently being computed, outermost first.
    path:   Vec<StaffId>,
}

impl<'e, 'a, R: StaffRepository> Computation<'e, 'a, R> {
    fn new(engine: &'e SalaryEngine<'a, R>) -> Self {
        Self {
            engine,
            memo: HashMap::new(),
            path: Vec::new(),
        }
    }

    fn salary_of(&mut self, member: &StaffMember) -> RosterResult<Amount> {
        if let Some(&salary) = self.memo.get(&member.id) {
            return Ok(salary);
        }
        if self.path.contains(&member.id) {
            log::warn!("supervisor cycle through staff member {}: {:?}", member.id, self.path);
            return Err(RosterError::SupervisorCycle { id: member.id });
        }

        self.path.push(member.id);
        let result = self.compute(member);
        self.path.pop();

        let salary = result?;
        self.memo.insert(member.id, salary);
        Ok(salary)
    }

    fn compute(&mut self, member: &StaffMember) -> RosterResult<Amount> {
        let rules = self.engine.rules.for_role(member.role);
        let years = years_worked(member.joined_date, self.engine.as_of);
        let tenure_fraction = rules.tenure_fraction(years);

        let subordinate_bonus = self.subordinate_bonus_of(member)?;
        let salary = round_cents(member.base_salary * (1.0 + tenure_fraction) + subordinate_bonus);

        log::debug!(
            "staff {} ({}): years={years} tenure={tenure_fraction:.4} bonus={subordinate_bonus:.4} salary={salary:.2}",
            member.id,
            member.role
        );
        Ok(salary)
    }

    fn subordinate_bonus_of(&mut self, member: &StaffMember) -> RosterResult<Amount> {
        let rate = self.engine.rules.for_role(member.role).subordinate_rate;

        let total = match member.role.subordinate_scope() {
            SubordinateScope::None => return Ok(0.0),
            SubordinateScope::Direct => self.direct_salaries(member.id)?,
            SubordinateScope::Transitive => {
                let mut ancestry = vec![member.id];
                self.downstream_salaries(member.id, &mut ancestry)?
            }
        };

        Ok(rate * total)
    }

    /// Σ salary of the direct reports of `id`.
    fn direct_salaries(&mut self, id: StaffId) -> RosterResult<Amount> {
        let mut total = 0.0;
        for sub in self.engine.repo.find_by_supervisor(id)? {
            total += self.salary_of(&sub)?;
        }
        Ok(total)
    }

    /// Σ salary of every descendant of `id`, accumulated per branch:
    /// each report contributes its own salary plus its subtree.
    fn downstream_salaries(
        &mut self,
        id: StaffId,
        ancestry: &mut Vec<StaffId>,
    ) -> RosterResult<Amount> {
        let mut total = 0.0;
        for sub in self.engine.repo.find_by_supervisor(id)? {
            if ancestry.contains(&sub.id) {
                log::warn!("supervisor cycle below staff member {id}: {ancestry:?}");
                return Err(RosterError::SupervisorCycle { id: sub.id });
            }

            let sub_salary = self.salary_of(&sub)?;

            ancestry.push(sub.id);
            let below = self.downstream_salaries(sub.id, ancestry);
            ancestry.pop();

            total += sub_salary + below?;
        }
        Ok(total)
    }
}
