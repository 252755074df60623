use async_trait::async_trait;
use slice_framework::{FrameworkError, Slice, SliceActor, SliceClient, Thunk};
use std::time::Duration;

// --- Test Slice ---

#[derive(Clone, Debug, Default, PartialEq)]
struct Inventory {
    items: Vec<String>,
    busy: bool,
}

#[derive(Clone, Debug, PartialEq)]
enum InventoryAction {
    SetBusy(bool),
    SetItems(Vec<String>),
}

impl Slice for Inventory {
    type Action = InventoryAction;

    fn reduce(&mut self, action: InventoryAction) {
        match action {
            InventoryAction::SetBusy(busy) => self.busy = busy,
            InventoryAction::SetItems(items) => self.items = items,
        }
    }
}

/// Marks the slice busy, waits, then stores its items.
struct LoadItems {
    items: Vec<String>,
    delay: Duration,
}

#[async_trait]
impl Thunk<Inventory> for LoadItems {
    async fn run(self, store: SliceClient<Inventory>) {
        let _ = store.dispatch(InventoryAction::SetBusy(true)).await;
        tokio::time::sleep(self.delay).await;
        let _ = store.dispatch(InventoryAction::SetBusy(false)).await;
        let _ = store.dispatch(InventoryAction::SetItems(self.items)).await;
    }
}

// --- Tests ---

#[tokio::test]
async fn test_dispatch_is_visible_to_every_clone() {
    let (actor, client) = SliceActor::new(Inventory::default(), 10);
    let handle = tokio::spawn(actor.run());

    let reader = client.clone();
    client
        .dispatch(InventoryAction::SetItems(vec!["bolt".into()]))
        .await
        .unwrap();

    assert_eq!(reader.state().items, vec!["bolt"]);
    assert_eq!(reader.snapshot().await.unwrap().items, vec!["bolt"]);
    assert_eq!(reader.with_state(|s| s.items.len()), 1);

    drop(client);
    drop(reader);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_subscriber_sees_published_states() {
    let (actor, client) = SliceActor::new(Inventory::default(), 10);
    tokio::spawn(actor.run());

    let mut updates = client.subscribe();
    client.dispatch(InventoryAction::SetBusy(true)).await.unwrap();

    updates.changed().await.unwrap();
    assert!(updates.borrow_and_update().busy);
}

#[tokio::test]
async fn test_dispatch_thunk_waits_for_completion() {
    let (actor, client) = SliceActor::new(Inventory::default(), 10);
    tokio::spawn(actor.run());

    client
        .dispatch_thunk(LoadItems {
            items: vec!["nut".into(), "washer".into()],
            delay: Duration::from_millis(1),
        })
        .await;

    let state = client.state();
    assert!(!state.busy);
    assert_eq!(state.items, vec!["nut", "washer"]);
}

#[tokio::test]
async fn test_dropped_dispatch_thunk_still_completes() {
    let (actor, client) = SliceActor::new(Inventory::default(), 10);
    tokio::spawn(actor.run());

    let waited = tokio::time::timeout(
        Duration::from_millis(5),
        client.dispatch_thunk(LoadItems {
            items: vec!["gear".into()],
            delay: Duration::from_millis(40),
        }),
    )
    .await;
    assert!(waited.is_err());

    tokio::time::sleep(Duration::from_millis(150)).await;
    let state = client.state();
    assert!(!state.busy);
    assert_eq!(state.items, vec!["gear"]);
}

#[tokio::test]
async fn test_concurrent_thunks_last_write_wins() {
    let (actor, client) = SliceActor::new(Inventory::default(), 10);
    tokio::spawn(actor.run());

    let slow = client.spawn_thunk(LoadItems {
        items: vec!["slow".into()],
        delay: Duration::from_millis(50),
    });
    let fast = client.spawn_thunk(LoadItems {
        items: vec!["fast".into()],
        delay: Duration::from_millis(1),
    });

    fast.await.unwrap();
    slow.await.unwrap();

    // The slower thunk finished last, so its items overwrite the faster one's
    assert_eq!(client.state().items, vec!["slow"]);
}

#[tokio::test]
async fn test_dispatch_after_shutdown_fails() {
    let (actor, client) = SliceActor::new(Inventory::default(), 10);
    let handle = tokio::spawn(actor.run());
    handle.abort();
    let _ = handle.await;

    let result = client.dispatch(InventoryAction::SetBusy(true)).await;
    assert_eq!(result, Err(FrameworkError::ActorClosed));
}
