//! [`Event`] and [`Notification`] definitions.

use common::{define_kind, DateTime};
use derive_more::{
    AsRef, Display, From, FromStr as DeriveFromStr, Into,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{user, PaymentHistory};

/// Human-readable message of an [`Event`] or a [`Notification`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, Into, PartialEq)]
#[as_ref(str)]
#[from(&str, String)]
pub struct Message(String);

/// Something that happened in the rental system, worth surfacing to a user.
#[derive(Clone, Debug)]
pub struct Event {
    /// Indicator whether this [`Event`] hasn't been surfaced yet.
    pub opened: bool,

    /// [`Message`] of this [`Event`].
    pub text: Message,
}

impl Event {
    /// Creates a new not-yet-surfaced [`Event`].
    #[must_use]
    pub fn opened(text: Message) -> Self {
        Self { opened: true, text }
    }
}

/// Append-only log of [`Event`]s.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    /// Recorded [`Event`]s, oldest first.
    events: Vec<Event>,
}

impl EventLog {
    /// Appends the provided [`Event`] to this [`EventLog`].
    pub fn record(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Returns [`Message`]s of the not-yet-surfaced [`Event`]s, marking them
    /// as surfaced.
    pub fn new_messages(&mut self) -> Vec<Message> {
        self.events
            .iter_mut()
            .filter(|ev| ev.opened)
            .map(|ev| {
                ev.opened = false;
                ev.text.clone()
            })
            .collect()
    }

    /// Returns [`Message`]s of all the recorded [`Event`]s, oldest first.
    #[must_use]
    pub fn all_messages(&self) -> Vec<Message> {
        self.events.iter().map(|ev| ev.text.clone()).collect()
    }
}

/// Message addressed to a concrete [`User`].
///
/// [`User`]: crate::domain::User
#[derive(Clone, Debug)]
pub struct Notification {
    /// ID of this [`Notification`].
    pub id: Id,

    /// [`Message`] of this [`Notification`].
    pub message: Message,

    /// ID of the [`User`] this [`Notification`] is addressed to.
    ///
    /// [`User`]: crate::domain::User
    pub recipient_id: user::Id,

    /// Current [`Status`] of this [`Notification`].
    pub status: Status,
}

impl Notification {
    /// Creates a new unread [`Notification`] for the specified [`User`].
    ///
    /// [`User`]: crate::domain::User
    #[must_use]
    pub fn new(recipient_id: user::Id, message: Message) -> Self {
        Self {
            id: Id::new(),
            message,
            recipient_id,
            status: Status::Unread,
        }
    }

    /// Marks this [`Notification`] as read.
    pub fn mark_read(&mut self) {
        self.status = Status::Read;
    }

    /// Builds overdue rent reminders for the specified [`User`] out of the
    /// provided [`PaymentHistory`].
    ///
    /// One [`Notification`] per pending payment past its due date.
    #[must_use]
    pub fn overdue_reminders(
        recipient_id: user::Id,
        history: &PaymentHistory,
    ) -> Vec<Self> {
        let now = DateTime::now();
        history
            .unpaid()
            .filter_map(|p| {
                let days_overdue = now.whole_days_since(p.due_at.coerce());
                (days_overdue > 0).then(|| {
                    Self::new(
                        recipient_id,
                        format!(
                            "Rent payment of {} is {days_overdue} day(s) \
                             overdue",
                            p.amount,
                        )
                        .into(),
                    )
                })
            })
            .collect()
    }
}

define_kind! {
    #[doc = "Status of a [`Notification`]."]
    enum Status {
        #[doc = "[`Notification`] hasn't been read by its recipient yet."]
        Unread = 1,

        #[doc = "[`Notification`] has been read by its recipient."]
        Read = 2,
    }
}

/// ID of a [`Notification`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    DeriveFromStr,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

#[cfg(test)]
mod spec {
    use common::DateTime;

    use crate::domain::{lease, payment, user, Payment, PaymentHistory};

    use super::{Event, EventLog, Notification, Status};

    #[test]
    fn new_messages_are_drained_once() {
        let mut log = EventLog::default();
        log.record(Event::opened("first".into()));
        log.record(Event::opened("second".into()));

        let fresh = log.new_messages();
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[0].as_ref(), "first");

        assert!(log.new_messages().is_empty());
        assert_eq!(log.all_messages().len(), 2);
    }

    #[test]
    fn reminds_of_overdue_payments_only() {
        let lease_id = lease::Id::new();
        let mut history = PaymentHistory::default();
        history.add(Payment::new(
            lease_id,
            "1200".parse().unwrap(),
            DateTime::from_date_str("2015-01-01").unwrap().coerce(),
        ));
        history.add(Payment::new(
            lease_id,
            "1200".parse().unwrap(),
            DateTime::now().checked_add_months(1).unwrap().coerce(),
        ));
        let mut paid = Payment::new(
            lease_id,
            "1200".parse().unwrap(),
            DateTime::from_date_str("2015-02-01").unwrap().coerce(),
        );
        _ = paid
            .process(DateTime::from_date_str("2015-02-01").unwrap().coerce())
            .unwrap();
        history.add(paid);

        let reminders =
            Notification::overdue_reminders(user::Id::new(), &history);

        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].status, Status::Unread);
        assert!(reminders[0].message.as_ref().contains("overdue"));
        assert!(reminders[0].message.as_ref().contains("1200.00"));
    }

    #[test]
    fn notifications_are_marked_read() {
        let mut notification =
            Notification::new(user::Id::new(), "hello".into());
        assert_eq!(notification.status, Status::Unread);

        notification.mark_read();
        assert_eq!(notification.status, Status::Read);

        // Marking again keeps it read.
        notification.mark_read();
        assert_eq!(notification.status, Status::Read);
    }

    #[test]
    fn payment_status_survives_reminder_pass() {
        let lease_id = lease::Id::new();
        let mut history = PaymentHistory::default();
        history.add(Payment::new(
            lease_id,
            "900".parse().unwrap(),
            DateTime::from_date_str("2015-01-01").unwrap().coerce(),
        ));

        _ = Notification::overdue_reminders(user::Id::new(), &history);

        assert_eq!(history.payments()[0].status, payment::Status::Pending);
    }
}
