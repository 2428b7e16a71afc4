//! Presentation logic of the rename wallet screen.
//!
//! The screen feeds two event streams in (it appeared, the user saved a name)
//! and gets two streams back (the name was saved, what to display). The
//! displayed state merges the locally stored name with the ENS name resolved
//! for the address, which is only ever used as a placeholder.

use std::sync::Arc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;

use moniker_resolver::traits::DomainResolver;
use moniker_storage::traits::WalletNameStore;
use moniker_types::analytics::AnalyticsAction;
use moniker_types::name::normalize_wallet_name;
use moniker_types::primitives::{format_address, Address};
use moniker_types::view::{
    ViewState, RENAME_WALLET_TITLE, SAVE_WALLET_NAME_TITLE, WALLET_NAME_TITLE,
};

use crate::analytics::AnalyticsLogger;
use crate::error::AppError;

/// Events coming from the screen.
pub struct RenameWalletInput {
    /// Fires each time the screen appears.
    pub appear: UnboundedReceiver<()>,
    /// Fires with the entered text each time the user saves.
    pub save_wallet_name: UnboundedReceiver<String>,
}

/// Events going back to the screen.
pub struct RenameWalletOutput {
    /// One `()` per successfully saved name.
    pub wallet_name_saved: UnboundedReceiver<()>,
    pub view_state: UnboundedReceiver<ViewState>,
    /// Flips to `true` once ENS resolution has settled. Any view state
    /// carrying the settled placeholder is queued before the flip.
    pub ens_resolved: watch::Receiver<bool>,
}

/// Sending halves matching a [`RenameWalletInput`], for whoever drives the screen.
pub struct RenameWalletEvents {
    pub appear: UnboundedSender<()>,
    pub save_wallet_name: UnboundedSender<String>,
}

impl RenameWalletInput {
    /// Create a connected input and its senders.
    pub fn channel() -> (RenameWalletEvents, RenameWalletInput) {
        let (appear_tx, appear_rx) = unbounded_channel();
        let (save_tx, save_rx) = unbounded_channel();
        (
            RenameWalletEvents {
                appear: appear_tx,
                save_wallet_name: save_tx,
            },
            RenameWalletInput {
                appear: appear_rx,
                save_wallet_name: save_rx,
            },
        )
    }
}

pub struct RenameWalletViewModel {
    account: Address,
    store: Arc<dyn WalletNameStore>,
    resolver: Arc<dyn DomainResolver>,
    analytics: Arc<dyn AnalyticsLogger>,
}

impl RenameWalletViewModel {
    pub fn new(
        account: Address,
        store: Arc<dyn WalletNameStore>,
        resolver: Arc<dyn DomainResolver>,
        analytics: Arc<dyn AnalyticsLogger>,
    ) -> Self {
        Self {
            account,
            store,
            resolver,
            analytics,
        }
    }

    pub fn title(&self) -> &'static str {
        RENAME_WALLET_TITLE
    }

    pub fn save_wallet_name_title(&self) -> &'static str {
        SAVE_WALLET_NAME_TITLE
    }

    pub fn wallet_name_title(&self) -> &'static str {
        WALLET_NAME_TITLE
    }

    /// Wire the screen's input events to its outputs.
    ///
    /// ENS resolution starts immediately. A view state is emitted on every
    /// appear, and once more when resolution settles if the screen has
    /// appeared by then. A failed resolution settles to no placeholder.
    ///
    /// Must be called from within a Tokio runtime. The driving task ends once
    /// both inputs are closed and no further view state can be produced.
    pub fn transform(&self, input: RenameWalletInput) -> RenameWalletOutput {
        let (saved_tx, saved_rx) = unbounded_channel();
        let (state_tx, state_rx) = unbounded_channel();
        let (resolved_tx, resolved_rx) = watch::channel(false);

        let task = RenameWalletTask {
            account: self.account,
            store: self.store.clone(),
            analytics: self.analytics.clone(),
            saved_tx,
            state_tx,
            resolved_tx,
        };
        let resolver = self.resolver.clone();
        tokio::spawn(task.run(input, resolver));

        RenameWalletOutput {
            wallet_name_saved: saved_rx,
            view_state: state_rx,
            ens_resolved: resolved_rx,
        }
    }
}

struct RenameWalletTask {
    account: Address,
    store: Arc<dyn WalletNameStore>,
    analytics: Arc<dyn AnalyticsLogger>,
    saved_tx: UnboundedSender<()>,
    state_tx: UnboundedSender<ViewState>,
    resolved_tx: watch::Sender<bool>,
}

impl RenameWalletTask {
    async fn run(self, mut input: RenameWalletInput, resolver: Arc<dyn DomainResolver>) {
        let resolution = resolve_placeholder(resolver, self.account);
        tokio::pin!(resolution);

        let mut appear_open = true;
        let mut save_open = true;
        let mut resolved = false;
        let mut placeholder: Option<String> = None;
        // Stored name read on the latest appear; None until the first one.
        let mut assigned: Option<Option<String>> = None;

        loop {
            if !appear_open && !save_open && (resolved || assigned.is_none()) {
                break;
            }

            tokio::select! {
                biased;

                event = input.appear.recv(), if appear_open => match event {
                    Some(()) => {
                        let text = self.stored_name();
                        self.emit(text.clone(), placeholder.clone());
                        assigned = Some(text);
                    }
                    None => appear_open = false,
                },
                request = input.save_wallet_name.recv(), if save_open => match request {
                    Some(name) => {
                        if self.save(&name) {
                            let _ = self.saved_tx.send(());
                        }
                    }
                    None => save_open = false,
                },
                result = &mut resolution, if !resolved => {
                    resolved = true;
                    placeholder = result;
                    if let Some(text) = &assigned {
                        self.emit(text.clone(), placeholder.clone());
                    }
                    self.resolved_tx.send_replace(true);
                }
            }
        }

        tracing::debug!(address = %format_address(&self.account), "rename wallet screen closed");
    }

    fn emit(&self, text: Option<String>, placeholder: Option<String>) {
        // A dropped receiver just means nobody is rendering any more.
        let _ = self.state_tx.send(ViewState::new(text, placeholder));
    }

    fn stored_name(&self) -> Option<String> {
        match self.store.name(&self.account) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(
                    address = %format_address(&self.account),
                    error = %e,
                    "failed to read wallet name"
                );
                None
            }
        }
    }

    fn save(&self, raw: &str) -> bool {
        match self.write_name(raw) {
            Ok(()) => {
                self.analytics.log(AnalyticsAction::NameWallet);
                true
            }
            Err(e) => {
                tracing::error!(
                    address = %format_address(&self.account),
                    error = %e,
                    "failed to save wallet name"
                );
                false
            }
        }
    }

    fn write_name(&self, raw: &str) -> Result<(), AppError> {
        match normalize_wallet_name(raw) {
            Some(name) => {
                self.store.add_or_update(&self.account, &name)?;
                tracing::info!(
                    address = %format_address(&self.account),
                    name = %name,
                    "wallet name saved"
                );
            }
            None => {
                self.store.remove(&self.account)?;
                tracing::info!(address = %format_address(&self.account), "wallet name cleared");
            }
        }
        Ok(())
    }
}

/// Resolve the ENS placeholder, treating any failure as "no name".
async fn resolve_placeholder(
    resolver: Arc<dyn DomainResolver>,
    account: Address,
) -> Option<String> {
    match resolver.resolve_ens(&account).await {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(
                address = %format_address(&account),
                error = %e,
                "ens resolution failed"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use moniker_resolver::error::ResolverError;
    use moniker_resolver::static_resolver::StaticResolver;
    use moniker_storage::error::StorageError;
    use moniker_storage::memory::MemoryNameStore;
    use moniker_storage::traits::NamedAddress;

    use super::*;

    const ACCOUNT: Address = [0x42u8; 20];

    #[derive(Default)]
    struct CountingAnalytics(AtomicUsize);

    impl AnalyticsLogger for CountingAnalytics {
        fn log(&self, action: AnalyticsAction) {
            assert_eq!(action, AnalyticsAction::NameWallet);
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Resolver that answers only once the test releases it.
    struct GatedResolver {
        gate: Mutex<Option<oneshot::Receiver<Result<Option<String>, ResolverError>>>>,
    }

    impl GatedResolver {
        fn new() -> (
            oneshot::Sender<Result<Option<String>, ResolverError>>,
            Arc<Self>,
        ) {
            let (tx, rx) = oneshot::channel();
            let resolver = Arc::new(Self {
                gate: Mutex::new(Some(rx)),
            });
            (tx, resolver)
        }
    }

    #[async_trait]
    impl DomainResolver for GatedResolver {
        async fn resolve_ens(&self, _address: &Address) -> Result<Option<String>, ResolverError> {
            let rx = self.gate.lock().unwrap().take();
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ResolverError::Rpc("gate dropped".to_string()))),
                None => Ok(None),
            }
        }
    }

    /// Store whose every operation fails.
    struct BrokenStore;

    impl WalletNameStore for BrokenStore {
        fn name(&self, _address: &Address) -> Result<Option<String>, StorageError> {
            Err(StorageError::ReadError {
                reason: "disk on fire".to_string(),
            })
        }

        fn add_or_update(&self, _address: &Address, _name: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteError {
                reason: "disk on fire".to_string(),
            })
        }

        fn remove(&self, _address: &Address) -> Result<(), StorageError> {
            Err(StorageError::WriteError {
                reason: "disk on fire".to_string(),
            })
        }

        fn names(&self) -> Result<Vec<NamedAddress>, StorageError> {
            Ok(Vec::new())
        }
    }

    struct Harness {
        store: Arc<MemoryNameStore>,
        analytics: Arc<CountingAnalytics>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                store: Arc::new(MemoryNameStore::new()),
                analytics: Arc::new(CountingAnalytics::default()),
            }
        }

        fn view_model(&self, resolver: Arc<dyn DomainResolver>) -> RenameWalletViewModel {
            RenameWalletViewModel::new(
                ACCOUNT,
                self.store.clone(),
                resolver,
                self.analytics.clone(),
            )
        }

        fn analytics_count(&self) -> usize {
            self.analytics.0.load(Ordering::SeqCst)
        }
    }

    async fn next<T>(rx: &mut UnboundedReceiver<T>) -> Option<T> {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for event")
    }

    #[test]
    fn test_screen_titles() {
        let harness = Harness::new();
        let vm = harness.view_model(Arc::new(StaticResolver::empty()));
        assert_eq!(vm.title(), "Rename Wallet");
        assert_eq!(vm.save_wallet_name_title(), "Save");
        assert_eq!(vm.wallet_name_title(), "Enter Wallet Name");
    }

    #[tokio::test]
    async fn test_no_view_state_before_appear() {
        let harness = Harness::new();
        let (gate, resolver) = GatedResolver::new();
        let vm = harness.view_model(resolver);
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        gate.send(Ok(Some("vitalik.eth".to_string()))).unwrap();
        drop(events);

        // Resolution settled without an appear, so nothing was emitted.
        assert_eq!(next(&mut output.view_state).await, None);
    }

    #[tokio::test]
    async fn test_appear_then_resolution() {
        let harness = Harness::new();
        harness.store.add_or_update(&ACCOUNT, "Savings").unwrap();
        let (gate, resolver) = GatedResolver::new();
        let vm = harness.view_model(resolver);
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        events.appear.send(()).unwrap();
        let first = next(&mut output.view_state).await.unwrap();
        assert_eq!(first.text.as_deref(), Some("Savings"));
        assert_eq!(first.placeholder, None);
        assert_eq!(first.title, "Rename Wallet");

        gate.send(Ok(Some("vitalik.eth".to_string()))).unwrap();
        let second = next(&mut output.view_state).await.unwrap();
        assert_eq!(second.text.as_deref(), Some("Savings"));
        assert_eq!(second.placeholder.as_deref(), Some("vitalik.eth"));
    }

    #[tokio::test]
    async fn test_resolution_before_appear_is_remembered() {
        let harness = Harness::new();
        let (gate, resolver) = GatedResolver::new();
        let vm = harness.view_model(resolver);
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        gate.send(Ok(Some("vitalik.eth".to_string()))).unwrap();
        // Let the task observe the resolution before the screen appears.
        tokio::time::sleep(Duration::from_millis(50)).await;

        events.appear.send(()).unwrap();
        let state = next(&mut output.view_state).await.unwrap();
        assert_eq!(state.text, None);
        assert_eq!(state.placeholder.as_deref(), Some("vitalik.eth"));
    }

    #[tokio::test]
    async fn test_resolution_failure_degrades_to_no_placeholder() {
        let harness = Harness::new();
        let (gate, resolver) = GatedResolver::new();
        let vm = harness.view_model(resolver);
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        events.appear.send(()).unwrap();
        let first = next(&mut output.view_state).await.unwrap();
        assert_eq!(first.placeholder, None);

        gate.send(Err(ResolverError::Timeout)).unwrap();
        let second = next(&mut output.view_state).await.unwrap();
        assert_eq!(second.placeholder, None);
        assert_eq!(second.text, None);
    }

    #[tokio::test]
    async fn test_save_persists_logs_and_signals() {
        let harness = Harness::new();
        let vm = harness.view_model(Arc::new(StaticResolver::empty()));
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        events
            .save_wallet_name
            .send("  Cold Storage ".to_string())
            .unwrap();
        assert_eq!(next(&mut output.wallet_name_saved).await, Some(()));

        assert_eq!(
            harness.store.name(&ACCOUNT).unwrap().as_deref(),
            Some("Cold Storage")
        );
        assert_eq!(harness.analytics_count(), 1);
    }

    #[tokio::test]
    async fn test_each_save_signals_once() {
        let harness = Harness::new();
        let vm = harness.view_model(Arc::new(StaticResolver::empty()));
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        events.save_wallet_name.send("one".to_string()).unwrap();
        events.save_wallet_name.send("two".to_string()).unwrap();
        drop(events);

        assert_eq!(next(&mut output.wallet_name_saved).await, Some(()));
        assert_eq!(next(&mut output.wallet_name_saved).await, Some(()));
        assert_eq!(next(&mut output.wallet_name_saved).await, None);
        assert_eq!(harness.store.name(&ACCOUNT).unwrap().as_deref(), Some("two"));
        assert_eq!(harness.analytics_count(), 2);
    }

    #[tokio::test]
    async fn test_blank_save_clears_name() {
        let harness = Harness::new();
        harness.store.add_or_update(&ACCOUNT, "Old").unwrap();
        let vm = harness.view_model(Arc::new(StaticResolver::empty()));
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        events.save_wallet_name.send("   ".to_string()).unwrap();
        assert_eq!(next(&mut output.wallet_name_saved).await, Some(()));
        assert_eq!(harness.store.name(&ACCOUNT).unwrap(), None);
    }

    #[tokio::test]
    async fn test_any_submitted_name_is_saved() {
        let harness = Harness::new();
        let vm = harness.view_model(Arc::new(StaticResolver::empty()));
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        let long = "a".repeat(65);
        events.save_wallet_name.send(long.clone()).unwrap();
        events
            .save_wallet_name
            .send("tab\there".to_string())
            .unwrap();
        drop(events);

        assert_eq!(next(&mut output.wallet_name_saved).await, Some(()));
        assert_eq!(next(&mut output.wallet_name_saved).await, Some(()));
        assert_eq!(next(&mut output.wallet_name_saved).await, None);
        assert_eq!(
            harness.store.name(&ACCOUNT).unwrap().as_deref(),
            Some("tab\there")
        );
        assert_eq!(harness.analytics_count(), 2);
    }

    #[tokio::test]
    async fn test_ens_resolved_flips_after_settled_state() {
        let harness = Harness::new();
        let (gate, resolver) = GatedResolver::new();
        let vm = harness.view_model(resolver);
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        events.appear.send(()).unwrap();
        next(&mut output.view_state).await.unwrap();
        assert!(!*output.ens_resolved.borrow());

        gate.send(Ok(Some("vitalik.eth".to_string()))).unwrap();
        tokio::time::timeout(Duration::from_secs(5), output.ens_resolved.wait_for(|done| *done))
            .await
            .expect("timed out waiting for resolution")
            .unwrap();
        // The settled state is already queued when the flag flips.
        let state = output.view_state.try_recv().unwrap();
        assert_eq!(state.placeholder.as_deref(), Some("vitalik.eth"));
    }

    #[tokio::test]
    async fn test_reappear_reads_saved_name() {
        let harness = Harness::new();
        let resolver = StaticResolver::empty().with_name(ACCOUNT, "vitalik.eth");
        let vm = harness.view_model(Arc::new(resolver));
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        events.save_wallet_name.send("Main".to_string()).unwrap();
        assert_eq!(next(&mut output.wallet_name_saved).await, Some(()));

        events.appear.send(()).unwrap();
        drop(events);

        let mut last = None;
        while let Some(state) = next(&mut output.view_state).await {
            last = Some(state);
        }
        let last = last.unwrap();
        assert_eq!(last.text.as_deref(), Some("Main"));
        assert_eq!(last.placeholder.as_deref(), Some("vitalik.eth"));
    }

    #[tokio::test]
    async fn test_store_failures_are_contained() {
        let analytics = Arc::new(CountingAnalytics::default());
        let vm = RenameWalletViewModel::new(
            ACCOUNT,
            Arc::new(BrokenStore),
            Arc::new(StaticResolver::empty()),
            analytics.clone(),
        );
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        events.appear.send(()).unwrap();
        events.save_wallet_name.send("Main".to_string()).unwrap();
        drop(events);

        let state = next(&mut output.view_state).await.unwrap();
        assert_eq!(state.text, None);
        assert_eq!(next(&mut output.wallet_name_saved).await, None);
        assert_eq!(analytics.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_task_waits_for_pending_resolution_after_inputs_close() {
        let harness = Harness::new();
        let (gate, resolver) = GatedResolver::new();
        let vm = harness.view_model(resolver);
        let (events, input) = RenameWalletInput::channel();
        let mut output = vm.transform(input);

        events.appear.send(()).unwrap();
        drop(events);
        assert!(next(&mut output.view_state).await.is_some());

        gate.send(Ok(Some("late.eth".to_string()))).unwrap();
        let state = next(&mut output.view_state).await.unwrap();
        assert_eq!(state.placeholder.as_deref(), Some("late.eth"));
        assert_eq!(next(&mut output.view_state).await, None);
    }
}
