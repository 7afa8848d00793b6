use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use domain::{
    repositories::designers::DesignerRepository,
    value_objects::{
        access_decisions::{AccessDecision, Destination, FlashMessage},
        enums::{subscription_statuses::SubscriptionStatus, user_roles::UserRole},
        gate_messages,
        gate_options::GateOptions,
        subscribers::{Subscriber, SubscriptionRecord},
    },
};
use tracing::{debug, error, info};

/// Active subscriptions ending within this many days carry a warning.
pub const EXPIRY_WARNING_DAYS: i64 = 7;

/// Access gate for designer-only pages.
pub struct SubscriptionGate<D>
where
    D: DesignerRepository + Send + Sync + 'static,
{
    designer_repo: Arc<D>,
}

impl<D> SubscriptionGate<D>
where
    D: DesignerRepository + Send + Sync + 'static,
{
    pub fn new(designer_repo: Arc<D>) -> Self {
        Self { designer_repo }
    }

    pub async fn evaluate(
        &self,
        subscriber: Option<&mut Subscriber>,
        now: DateTime<Utc>,
        options: &GateOptions,
    ) -> AccessDecision {
        let Some(subscriber) = subscriber else {
            debug!("subscription_gate: no authenticated subscriber");
            return AccessDecision::redirect(
                Destination::Login,
                FlashMessage::error(gate_messages::LOGIN_REQUIRED),
            );
        };

        let user_id = subscriber.user_id;

        if subscriber.role != UserRole::Designer {
            debug!(%user_id, role = %subscriber.role, "subscription_gate: non-designer rejected");
            return AccessDecision::redirect(
                Destination::Dashboard,
                FlashMessage::error(gate_messages::DESIGNERS_ONLY),
            );
        }

        let Some(record) = subscriber.subscription.as_mut() else {
            debug!(%user_id, "subscription_gate: designer profile missing");
            return AccessDecision::redirect(
                Destination::Dashboard,
                FlashMessage::error(gate_messages::DESIGNER_PROFILE_NOT_FOUND),
            );
        };

        self.reconcile_status(record, now).await;

        let decision = decide(record, now, options);
        debug!(
            %user_id,
            designer_id = %record.designer_id,
            status = %record.status,
            forward = decision.is_forward(),
            "subscription_gate: access decided"
        );
        decision
    }

    /// Brings a stale status in line with the end date and persists the change.
    ///
    /// Returns whether the status changed. A failed write is logged and the
    /// in-memory record keeps the new status.
    pub async fn reconcile_status(&self, record: &mut SubscriptionRecord, now: DateTime<Utc>) -> bool {
        let Some(next) = next_status(&record.status, record.end_date, now) else {
            return false;
        };

        let previous = std::mem::replace(&mut record.status, next.clone());
        let designer_id = record.designer_id;

        match self
            .designer_repo
            .update_subscription_status(designer_id, next.clone())
            .await
        {
            Ok(()) => info!(
                %designer_id,
                from = %previous,
                to = %next,
                "subscription_gate: status reconciled"
            ),
            Err(err) => error!(
                %designer_id,
                from = %previous,
                to = %next,
                db_error = ?err,
                "subscription_gate: failed to persist reconciled status"
            ),
        }

        true
    }
}

/// Status a record should hold at `now`, or `None` when it is already right.
///
/// Pending records and records without an end date are left alone; every
/// other status follows the end date.
pub fn next_status(
    status: &SubscriptionStatus,
    end_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<SubscriptionStatus> {
    if *status == SubscriptionStatus::Pending {
        return None;
    }
    let end_date = end_date?;

    let target = if now > end_date {
        SubscriptionStatus::Expired
    } else {
        SubscriptionStatus::Active
    };

    (*status != target).then_some(target)
}

/// Access decision for an already reconciled record.
pub fn decide(record: &SubscriptionRecord, now: DateTime<Utc>, options: &GateOptions) -> AccessDecision {
    match &record.status {
        SubscriptionStatus::Active => match record.end_date {
            Some(end_date) if end_date - now <= Duration::days(EXPIRY_WARNING_DAYS) => {
                AccessDecision::forward_with_warning(gate_messages::expiring_soon(days_between(
                    now, end_date,
                )))
            }
            _ => AccessDecision::forward(),
        },
        SubscriptionStatus::Pending => AccessDecision::redirect(
            Destination::SubscriptionPending,
            FlashMessage::info(gate_messages::SUBSCRIPTION_PENDING),
        ),
        SubscriptionStatus::Expired => {
            if let Some(grace_end) = grace_period_end(record, options) {
                if now <= grace_end {
                    return AccessDecision::forward_with_warning(
                        gate_messages::grace_period_remaining(days_between(now, grace_end)),
                    );
                }
            }

            match &options.redirect_target {
                Some(target) => AccessDecision::Redirect {
                    destination: Destination::Route(target.clone()),
                    flash: None,
                },
                None => AccessDecision::redirect(
                    Destination::SubscriptionRenewal,
                    FlashMessage::error(gate_messages::SUBSCRIPTION_EXPIRED),
                ),
            }
        }
        SubscriptionStatus::Rejected | SubscriptionStatus::Other(_) => AccessDecision::redirect(
            Destination::SubscriptionRenewal,
            FlashMessage::error(gate_messages::SUBSCRIPTION_REQUIRED),
        ),
    }
}

fn grace_period_end(record: &SubscriptionRecord, options: &GateOptions) -> Option<DateTime<Utc>> {
    let days = options.grace_period_days?;
    record
        .end_date?
        .checked_add_signed(Duration::days(i64::from(days)))
}

/// Whole calendar days from `from` to `to`, never negative.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    to.date_naive()
        .signed_duration_since(from.date_naive())
        .num_days()
        .max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::TimeZone;
    use domain::{
        repositories::designers::MockDesignerRepository,
        value_objects::enums::flash_severities::FlashSeverity,
    };
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn designer(status: SubscriptionStatus, end_date: Option<DateTime<Utc>>) -> Subscriber {
        Subscriber {
            user_id: Uuid::new_v4(),
            role: UserRole::Designer,
            subscription: Some(SubscriptionRecord {
                designer_id: Uuid::new_v4(),
                status,
                end_date,
            }),
        }
    }

    fn gate(repo: MockDesignerRepository) -> SubscriptionGate<MockDesignerRepository> {
        SubscriptionGate::new(Arc::new(repo))
    }

    fn renewal_redirect() -> AccessDecision {
        AccessDecision::redirect(
            Destination::SubscriptionRenewal,
            FlashMessage::error(gate_messages::SUBSCRIPTION_EXPIRED),
        )
    }

    #[tokio::test]
    async fn unauthenticated_requests_go_to_login() {
        let decision = gate(MockDesignerRepository::new())
            .evaluate(None, now(), &GateOptions::default().with_redirect_target("/x"))
            .await;

        assert_eq!(
            decision,
            AccessDecision::redirect(
                Destination::Login,
                FlashMessage::error(gate_messages::LOGIN_REQUIRED)
            )
        );
    }

    #[tokio::test]
    async fn ordinary_users_go_to_dashboard() {
        let mut subscriber = designer(SubscriptionStatus::Active, Some(now() + Duration::days(30)));
        subscriber.role = UserRole::Ordinary;

        let decision = gate(MockDesignerRepository::new())
            .evaluate(Some(&mut subscriber), now(), &GateOptions::default())
            .await;

        assert_eq!(
            decision,
            AccessDecision::redirect(
                Destination::Dashboard,
                FlashMessage::error(gate_messages::DESIGNERS_ONLY)
            )
        );
    }

    #[tokio::test]
    async fn designer_without_profile_goes_to_dashboard() {
        let mut subscriber = designer(SubscriptionStatus::Active, None);
        subscriber.subscription = None;

        let options = GateOptions::default()
            .with_grace_period(7)
            .with_redirect_target("/designer/billing");
        let decision = gate(MockDesignerRepository::new())
            .evaluate(Some(&mut subscriber), now(), &options)
            .await;

        assert_eq!(
            decision,
            AccessDecision::redirect(
                Destination::Dashboard,
                FlashMessage::error(gate_messages::DESIGNER_PROFILE_NOT_FOUND)
            )
        );
    }

    #[tokio::test]
    async fn active_subscription_far_from_expiry_passes_silently() {
        let mut subscriber = designer(SubscriptionStatus::Active, Some(now() + Duration::days(30)));

        let decision = gate(MockDesignerRepository::new())
            .evaluate(Some(&mut subscriber), now(), &GateOptions::default())
            .await;

        assert_eq!(decision, AccessDecision::forward());
    }

    #[tokio::test]
    async fn active_subscription_just_past_the_window_has_no_warning() {
        let end_date = now() + Duration::days(7) + Duration::minutes(1);
        let mut subscriber = designer(SubscriptionStatus::Active, Some(end_date));

        let decision = gate(MockDesignerRepository::new())
            .evaluate(Some(&mut subscriber), now(), &GateOptions::default())
            .await;

        assert_eq!(decision, AccessDecision::forward());
    }

    #[tokio::test]
    async fn active_subscription_ending_soon_warns_with_day_count() {
        for days in [0_i64, 1, 3, 7] {
            let mut subscriber =
                designer(SubscriptionStatus::Active, Some(now() + Duration::days(days)));

            let decision = gate(MockDesignerRepository::new())
                .evaluate(Some(&mut subscriber), now(), &GateOptions::default())
                .await;

            assert_eq!(
                decision,
                AccessDecision::forward_with_warning(format!("اشتراكك سينتهي خلال {} أيام", days)),
                "days = {days}"
            );
        }
    }

    #[tokio::test]
    async fn lapsed_active_subscription_is_expired_once() {
        let mut subscriber = designer(SubscriptionStatus::Active, Some(now() - Duration::days(1)));
        let designer_id = subscriber.subscription.as_ref().unwrap().designer_id;

        let mut repo = MockDesignerRepository::new();
        repo.expect_update_subscription_status()
            .with(eq(designer_id), eq(SubscriptionStatus::Expired))
            .times(1)
            .returning(|_, _| Ok(()));
        let gate = gate(repo);

        let first = gate
            .evaluate(Some(&mut subscriber), now(), &GateOptions::default())
            .await;
        let second = gate
            .evaluate(Some(&mut subscriber), now(), &GateOptions::default())
            .await;

        assert_eq!(first, renewal_redirect());
        assert_eq!(second, first);
        assert_eq!(
            subscriber.subscription.unwrap().status,
            SubscriptionStatus::Expired
        );
    }

    #[tokio::test]
    async fn extended_expired_subscription_is_reactivated() {
        let mut subscriber = designer(SubscriptionStatus::Expired, Some(now() + Duration::days(20)));

        let mut repo = MockDesignerRepository::new();
        repo.expect_update_subscription_status()
            .withf(|_, status| *status == SubscriptionStatus::Active)
            .times(1)
            .returning(|_, _| Ok(()));

        let decision = gate(repo)
            .evaluate(Some(&mut subscriber), now(), &GateOptions::default())
            .await;

        assert_eq!(decision, AccessDecision::forward());
    }

    #[tokio::test]
    async fn grace_period_keeps_access_open_with_remaining_days() {
        let mut subscriber = designer(SubscriptionStatus::Expired, Some(now() - Duration::days(2)));

        let decision = gate(MockDesignerRepository::new())
            .evaluate(
                Some(&mut subscriber),
                now(),
                &GateOptions::default().with_grace_period(7),
            )
            .await;

        assert_eq!(
            decision,
            AccessDecision::forward_with_warning(
                "انتهت صلاحية اشتراكك. يمكنك الوصول لهذه الصفحة لمدة 5 أيام أخرى"
            )
        );
    }

    #[tokio::test]
    async fn grace_period_ending_today_still_grants_access() {
        let mut subscriber = designer(SubscriptionStatus::Expired, Some(now() - Duration::days(7)));

        let decision = gate(MockDesignerRepository::new())
            .evaluate(
                Some(&mut subscriber),
                now(),
                &GateOptions::default().with_grace_period(7),
            )
            .await;

        assert_eq!(
            decision,
            AccessDecision::forward_with_warning(gate_messages::grace_period_remaining(0))
        );
    }

    #[tokio::test]
    async fn exhausted_grace_period_redirects_to_renewal() {
        let mut subscriber = designer(SubscriptionStatus::Expired, Some(now() - Duration::days(10)));

        let decision = gate(MockDesignerRepository::new())
            .evaluate(
                Some(&mut subscriber),
                now(),
                &GateOptions::default().with_grace_period(7),
            )
            .await;

        assert_eq!(decision, renewal_redirect());
    }

    #[tokio::test]
    async fn redirect_target_replaces_renewal_page_without_message() {
        let mut subscriber = designer(SubscriptionStatus::Expired, Some(now() - Duration::days(10)));

        let decision = gate(MockDesignerRepository::new())
            .evaluate(
                Some(&mut subscriber),
                now(),
                &GateOptions::default()
                    .with_grace_period(7)
                    .with_redirect_target("/designer/billing"),
            )
            .await;

        assert_eq!(
            decision,
            AccessDecision::Redirect {
                destination: Destination::Route("/designer/billing".to_string()),
                flash: None,
            }
        );
    }

    #[tokio::test]
    async fn pending_subscription_waits_for_approval() {
        let options = GateOptions::default()
            .with_grace_period(30)
            .with_redirect_target("/designer/billing");

        for end_date in [None, Some(now() - Duration::days(3)), Some(now() + Duration::days(3))] {
            let mut subscriber = designer(SubscriptionStatus::Pending, end_date);

            let decision = gate(MockDesignerRepository::new())
                .evaluate(Some(&mut subscriber), now(), &options)
                .await;

            assert_eq!(
                decision,
                AccessDecision::Redirect {
                    destination: Destination::SubscriptionPending,
                    flash: Some(FlashMessage {
                        severity: FlashSeverity::Info,
                        message: gate_messages::SUBSCRIPTION_PENDING.to_string(),
                    }),
                }
            );
            assert_eq!(
                subscriber.subscription.unwrap().status,
                SubscriptionStatus::Pending
            );
        }
    }

    #[tokio::test]
    async fn expired_without_end_date_gets_no_grace() {
        let mut subscriber = designer(SubscriptionStatus::Expired, None);

        let decision = gate(MockDesignerRepository::new())
            .evaluate(
                Some(&mut subscriber),
                now(),
                &GateOptions::default().with_grace_period(7),
            )
            .await;

        assert_eq!(decision, renewal_redirect());
    }

    #[tokio::test]
    async fn failed_status_write_does_not_change_the_decision() {
        let mut subscriber = designer(SubscriptionStatus::Active, Some(now() - Duration::days(2)));

        let mut repo = MockDesignerRepository::new();
        repo.expect_update_subscription_status()
            .times(1)
            .returning(|_, _| Err(anyhow!("connection reset")));

        let decision = gate(repo)
            .evaluate(
                Some(&mut subscriber),
                now(),
                &GateOptions::default().with_grace_period(7),
            )
            .await;

        assert_eq!(
            decision,
            AccessDecision::forward_with_warning(gate_messages::grace_period_remaining(5))
        );
        assert_eq!(
            subscriber.subscription.unwrap().status,
            SubscriptionStatus::Expired
        );
    }

    #[tokio::test]
    async fn unrecognized_statuses_fall_back_to_subscribe_prompt() {
        for status in [
            SubscriptionStatus::Rejected,
            SubscriptionStatus::Other("suspended".to_string()),
        ] {
            let mut subscriber = designer(status.clone(), None);

            let decision = gate(MockDesignerRepository::new())
                .evaluate(
                    Some(&mut subscriber),
                    now(),
                    &GateOptions::default().with_grace_period(7),
                )
                .await;

            assert_eq!(
                decision,
                AccessDecision::redirect(
                    Destination::SubscriptionRenewal,
                    FlashMessage::error(gate_messages::SUBSCRIPTION_REQUIRED)
                )
            );
            assert_eq!(subscriber.subscription.unwrap().status, status);
        }
    }

    #[tokio::test]
    async fn lapsed_unknown_status_is_expired_and_gets_grace() {
        let mut subscriber = designer(
            SubscriptionStatus::Other("suspended".to_string()),
            Some(now() - Duration::days(2)),
        );
        let designer_id = subscriber.subscription.as_ref().unwrap().designer_id;

        let mut repo = MockDesignerRepository::new();
        repo.expect_update_subscription_status()
            .with(eq(designer_id), eq(SubscriptionStatus::Expired))
            .times(1)
            .returning(|_, _| Ok(()));

        let decision = gate(repo)
            .evaluate(
                Some(&mut subscriber),
                now(),
                &GateOptions::default().with_grace_period(7),
            )
            .await;

        assert_eq!(
            decision,
            AccessDecision::forward_with_warning(gate_messages::grace_period_remaining(5))
        );
        assert_eq!(
            subscriber.subscription.unwrap().status,
            SubscriptionStatus::Expired
        );
    }

    #[tokio::test]
    async fn rejected_status_with_future_end_date_is_activated() {
        let mut subscriber = designer(SubscriptionStatus::Rejected, Some(now() + Duration::days(30)));

        let mut repo = MockDesignerRepository::new();
        repo.expect_update_subscription_status()
            .withf(|_, status| *status == SubscriptionStatus::Active)
            .times(1)
            .returning(|_, _| Ok(()));

        let decision = gate(repo)
            .evaluate(Some(&mut subscriber), now(), &GateOptions::default())
            .await;

        assert_eq!(decision, AccessDecision::forward());
        assert_eq!(
            subscriber.subscription.unwrap().status,
            SubscriptionStatus::Active
        );
    }

    #[tokio::test]
    async fn redirect_target_is_ignored_while_grace_remains() {
        let mut subscriber = designer(SubscriptionStatus::Expired, Some(now() - Duration::days(2)));

        let decision = gate(MockDesignerRepository::new())
            .evaluate(
                Some(&mut subscriber),
                now(),
                &GateOptions::default()
                    .with_grace_period(7)
                    .with_redirect_target("/designer/billing"),
            )
            .await;

        assert_eq!(
            decision,
            AccessDecision::forward_with_warning(gate_messages::grace_period_remaining(5))
        );
    }

    #[tokio::test]
    async fn reconcile_status_reports_whether_it_wrote() {
        let mut record = SubscriptionRecord {
            designer_id: Uuid::new_v4(),
            status: SubscriptionStatus::Active,
            end_date: Some(now() - Duration::seconds(1)),
        };

        let mut repo = MockDesignerRepository::new();
        repo.expect_update_subscription_status()
            .with(eq(record.designer_id), eq(SubscriptionStatus::Expired))
            .times(1)
            .returning(|_, _| Ok(()));
        let gate = gate(repo);

        assert!(gate.reconcile_status(&mut record, now()).await);
        assert!(!gate.reconcile_status(&mut record, now()).await);
        assert_eq!(record.status, SubscriptionStatus::Expired);
    }

    #[test]
    fn next_status_follows_the_end_date() {
        let end = now();

        assert_eq!(
            next_status(&SubscriptionStatus::Active, Some(end), end + Duration::seconds(1)),
            Some(SubscriptionStatus::Expired)
        );
        assert_eq!(next_status(&SubscriptionStatus::Active, Some(end), end), None);
        assert_eq!(
            next_status(&SubscriptionStatus::Expired, Some(end), end),
            Some(SubscriptionStatus::Active)
        );
        assert_eq!(
            next_status(&SubscriptionStatus::Expired, Some(end), end + Duration::days(1)),
            None
        );
    }

    #[test]
    fn next_status_skips_pending_and_undated_records() {
        let past = Some(now() - Duration::days(1));

        assert_eq!(next_status(&SubscriptionStatus::Pending, past, now()), None);
        assert_eq!(next_status(&SubscriptionStatus::Active, None, now()), None);
        assert_eq!(next_status(&SubscriptionStatus::Rejected, None, now()), None);
    }

    #[test]
    fn next_status_moves_rejected_and_unknown_statuses_by_date() {
        let past = Some(now() - Duration::days(1));
        let future = Some(now() + Duration::days(1));
        let suspended = SubscriptionStatus::Other("suspended".to_string());

        assert_eq!(
            next_status(&SubscriptionStatus::Rejected, past, now()),
            Some(SubscriptionStatus::Expired)
        );
        assert_eq!(
            next_status(&SubscriptionStatus::Rejected, future, now()),
            Some(SubscriptionStatus::Active)
        );
        assert_eq!(next_status(&suspended, past, now()), Some(SubscriptionStatus::Expired));
        assert_eq!(next_status(&suspended, future, now()), Some(SubscriptionStatus::Active));
    }

    #[test]
    fn days_between_counts_calendar_days() {
        let start = Utc.with_ymd_and_hms(2026, 3, 10, 23, 0, 0).unwrap();

        assert_eq!(days_between(start, start), 0);
        assert_eq!(days_between(start, start + Duration::hours(2)), 1);
        assert_eq!(days_between(start, start + Duration::days(5)), 5);
        assert_eq!(days_between(start, start - Duration::days(2)), 0);
    }
}
