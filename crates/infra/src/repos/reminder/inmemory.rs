use super::{IReminderRepo, ReminderRepoError};
use crate::repos::shared::inmemory_repo::*;
use calendar_reminders_domain::{Color, Reminder, ReminderValidationError, ID};
use chrono::{DateTime, Utc};

type IdGenerator = Box<dyn Fn() -> ID + Send + Sync>;

pub struct InMemoryReminderRepo {
    reminders: Collection<Reminder>,
    generate_id: IdGenerator,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self::with_id_generator(ID::new)
    }

    pub fn with_id_generator<F>(generate_id: F) -> Self
    where
        F: Fn() -> ID + Send + Sync + 'static,
    {
        Self {
            reminders: Default::default(),
            generate_id: Box::new(generate_id),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl IReminderRepo for InMemoryReminderRepo {
    fn create(&self, reminder: &Reminder) -> Result<ID, ReminderRepoError> {
        let reminder_id = (self.generate_id)();
        if insert(&reminder_id, reminder, &self.reminders) {
            Ok(reminder_id)
        } else {
            Err(ReminderRepoError::DuplicateId(reminder_id))
        }
    }

    fn update(&self, reminder_id: &ID, reminder: &Reminder) -> bool {
        save(reminder_id, reminder, &self.reminders)
    }

    fn update_with(
        &self,
        reminder_id: &ID,
        edit: &dyn Fn(&Reminder) -> Result<Reminder, ReminderValidationError>,
    ) -> Option<Result<Reminder, ReminderValidationError>> {
        update_with(reminder_id, &self.reminders, edit)
    }

    fn delete(&self, reminder_id: &ID) -> bool {
        delete(reminder_id, &self.reminders).is_some()
    }

    fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    fn find_by_description(&self, description: &str) -> Vec<Reminder> {
        let description = description.to_lowercase();
        find_by(&self.reminders, |reminder| {
            reminder.description().to_lowercase().contains(&description)
        })
    }

    fn find_by_date(&self, start: &DateTime<Utc>, end: Option<&DateTime<Utc>>) -> Vec<Reminder> {
        let mut reminders = find_by(&self.reminders, |reminder| reminder.date_time() > start);

        if let Some(end) = end {
            if !reminders.is_empty() {
                reminders.retain(|reminder| reminder.date_time() < end);
            }
        }

        reminders
    }

    fn find_by_city_name(&self, city_name: &str) -> Vec<Reminder> {
        find_by(&self.reminders, |reminder| reminder.city().contains(city_name))
    }

    fn find_by_color(&self, color: &Color) -> Vec<Reminder> {
        find_by(&self.reminders, |reminder| reminder.color() == color)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use calendar_reminders_domain::ReminderBuilder;

    #[test]
    fn it_refuses_to_overwrite_on_duplicate_id() {
        let fixed_id = ID::new();
        let id = fixed_id.clone();
        let repo = InMemoryReminderRepo::with_id_generator(move || id.clone());

        let mut builder = ReminderBuilder::new();
        builder.description("First").city("Testing city");
        let first = builder.build().unwrap();
        let second = builder.description("Second").build().unwrap();

        assert_eq!(repo.create(&first), Ok(fixed_id.clone()));
        assert_eq!(
            repo.create(&second),
            Err(ReminderRepoError::DuplicateId(fixed_id.clone()))
        );
        assert_eq!(repo.find(&fixed_id), Some(first));
    }
}
