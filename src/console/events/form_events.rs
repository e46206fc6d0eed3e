//! # Form Events
//!
//! Callback interface a form controller exposes to the page hosting it.

/// Resource a form or list operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    User,
    Company,
    Job,
    Application,
}

impl Resource {
    /// Lowercase singular name, as used in notices
    pub fn singular(&self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Company => "company",
            Resource::Job => "job",
            Resource::Application => "application",
        }
    }

    /// Lowercase plural name
    pub fn plural(&self) -> &'static str {
        match self {
            Resource::User => "users",
            Resource::Company => "companies",
            Resource::Job => "jobs",
            Resource::Application => "applications",
        }
    }

    /// Capitalized plural name, as used in list headers
    pub fn title(&self) -> &'static str {
        match self {
            Resource::User => "Users",
            Resource::Company => "Companies",
            Resource::Job => "Jobs",
            Resource::Application => "Applications",
        }
    }
}

/// Events emitted by form controllers
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A new entity was created by the server
    Created { resource: Resource, id: i64 },

    /// An existing entity was updated by the server
    Updated { resource: Resource, id: i64 },
}

/// Type alias for form event handlers to reduce complexity
pub type FormEventHandler = Box<dyn Fn(&FormEvent) + Send + Sync>;

/// Handlers registered by the host of one form instance
#[derive(Default)]
pub struct FormEventHandlers {
    handlers: Vec<FormEventHandler>,
}

impl FormEventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: FormEventHandler) {
        self.handlers.push(handler);
    }

    pub fn publish(&self, event: FormEvent) {
        for handler in &self.handlers {
            handler(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for FormEventHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEventHandlers")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn handlers_should_receive_published_events() {
        let mut handlers = FormEventHandlers::new();
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();

        handlers.subscribe(Box::new(move |event| {
            received_clone.lock().unwrap().push(event.clone());
        }));

        let event = FormEvent::Updated {
            resource: Resource::Job,
            id: 9,
        };
        handlers.publish(event.clone());

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], event);
    }

    #[test]
    fn publish_without_handlers_should_be_a_no_op() {
        let handlers = FormEventHandlers::new();
        assert!(handlers.is_empty());
        handlers.publish(FormEvent::Created {
            resource: Resource::User,
            id: 1,
        });
    }

    #[test]
    fn resource_names_should_match_paths() {
        assert_eq!(Resource::Company.plural(), "companies");
        assert_eq!(Resource::Application.title(), "Applications");
        assert_eq!(Resource::Job.singular(), "job");
    }
}
