// Fluent construction of account payloads, validated at build time
use shopharness_common::{HarnessError, HarnessResult};

use crate::models::TestUser;

/// Builder for [`TestUser`] account payloads.
///
/// Every required field must be set before [`build`](Self::build);
/// `company` and `address2` are optional and default to blank. The built
/// payload also passes [`TestUser::validate`], so a builder result is
/// always sendable.
#[derive(Debug, Default)]
pub struct UserAccountBuilder {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    title: Option<String>,
    birth_date: Option<String>,
    birth_month: Option<String>,
    birth_year: Option<String>,
    firstname: Option<String>,
    lastname: Option<String>,
    company: Option<String>,
    address1: Option<String>,
    address2: Option<String>,
    country: Option<String>,
    zipcode: Option<String>,
    state: Option<String>,
    city: Option<String>,
    mobile_number: Option<String>,
}

impl UserAccountBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Mr, Mrs, or Miss.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Day, month name, and 4-digit year, as the form expects them.
    pub fn birth_date(
        mut self,
        day: impl Into<String>,
        month: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        self.birth_date = Some(day.into());
        self.birth_month = Some(month.into());
        self.birth_year = Some(year.into());
        self
    }

    pub fn full_name(
        mut self,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
    ) -> Self {
        self.firstname = Some(firstname.into());
        self.lastname = Some(lastname.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn address(mut self, address1: impl Into<String>) -> Self {
        self.address1 = Some(address1.into());
        self
    }

    pub fn address2(mut self, address2: impl Into<String>) -> Self {
        self.address2 = Some(address2.into());
        self
    }

    pub fn location(
        mut self,
        country: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        self.country = Some(country.into());
        self.state = Some(state.into());
        self.city = Some(city.into());
        self.zipcode = Some(zipcode.into());
        self
    }

    pub fn mobile_number(mut self, mobile_number: impl Into<String>) -> Self {
        self.mobile_number = Some(mobile_number.into());
        self
    }

    /// Assemble and validate the payload.
    pub fn build(self) -> HarnessResult<TestUser> {
        let mut missing = Vec::new();
        let mut take = |name: &'static str, value: Option<String>| match value {
            Some(value) => value,
            None => {
                missing.push(name);
                String::new()
            }
        };

        let user = TestUser {
            name: take("name", self.name),
            email: take("email", self.email),
            password: take("password", self.password),
            title: take("title", self.title),
            birth_date: take("birth_date", self.birth_date),
            birth_month: take("birth_month", self.birth_month),
            birth_year: take("birth_year", self.birth_year),
            firstname: take("firstname", self.firstname),
            lastname: take("lastname", self.lastname),
            company: self.company.unwrap_or_default(),
            address1: take("address1", self.address1),
            address2: self.address2.unwrap_or_default(),
            country: take("country", self.country),
            zipcode: take("zipcode", self.zipcode),
            state: take("state", self.state),
            city: take("city", self.city),
            mobile_number: take("mobile_number", self.mobile_number),
        };

        if !missing.is_empty() {
            return Err(HarnessError::validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }
        user.validate()?;
        Ok(user)
    }
}
