use core::convert::Infallible;

use serde::{Deserialize, Serialize};

use plantshop_catalog::Product;
use plantshop_core::{Aggregate, AggregateRoot, Entity, Price, ProductId};
use plantshop_events::Event;

/// A product in the cart plus how many of it are selected (always >= 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

impl Entity for CartEntry {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.product.id
    }
}

/// Aggregate root: Cart.
///
/// Entries keep the order in which products were first added, and there is
/// at most one entry per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
    version: u64,
}

impl Cart {
    pub const AGGREGATE_TYPE: &'static str = "cart";

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn entry(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.entry(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of quantities across all entries.
    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of quantity x price across all entries.
    pub fn total_cost(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    fn entry_mut(&mut self, id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }
}

impl AggregateRoot for Cart {
    /// A visitor has exactly one cart, so there is nothing to tell carts apart.
    type Id = ();

    fn id(&self) -> &Self::Id {
        &()
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddToCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCart {
    pub product: Product,
}

/// Command: IncreaseQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncreaseQuantity {
    pub product_id: ProductId,
}

/// Command: DecreaseQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecreaseQuantity {
    pub product_id: ProductId,
}

/// Command: RemoveFromCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFromCart {
    pub product_id: ProductId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddToCart(AddToCart),
    IncreaseQuantity(IncreaseQuantity),
    DecreaseQuantity(DecreaseQuantity),
    RemoveFromCart(RemoveFromCart),
}

impl CartCommand {
    pub fn add(product: Product) -> Self {
        Self::AddToCart(AddToCart { product })
    }

    pub fn increase(product_id: ProductId) -> Self {
        Self::IncreaseQuantity(IncreaseQuantity { product_id })
    }

    pub fn decrease(product_id: ProductId) -> Self {
        Self::DecreaseQuantity(DecreaseQuantity { product_id })
    }

    pub fn remove(product_id: ProductId) -> Self {
        Self::RemoveFromCart(RemoveFromCart { product_id })
    }
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product: Product,
}

/// Event: QuantityIncreased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityIncreased {
    pub product_id: ProductId,
}

/// Event: QuantityDecreased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityDecreased {
    pub product_id: ProductId,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub product_id: ProductId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    QuantityIncreased(QuantityIncreased),
    QuantityDecreased(QuantityDecreased),
    ItemRemoved(ItemRemoved),
}

impl CartEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            CartEvent::ItemAdded(e) => e.product.id,
            CartEvent::QuantityIncreased(e) => e.product_id,
            CartEvent::QuantityDecreased(e) => e.product_id,
            CartEvent::ItemRemoved(e) => e.product_id,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::QuantityIncreased(_) => "cart.item.quantity_increased",
            CartEvent::QuantityDecreased(_) => "cart.item.quantity_decreased",
            CartEvent::ItemRemoved(_) => "cart.item.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                self.entries.push(CartEntry::new(e.product.clone()));
            }
            CartEvent::QuantityIncreased(e) => {
                if let Some(entry) = self.entry_mut(e.product_id) {
                    entry.quantity = entry.quantity.saturating_add(1);
                }
            }
            CartEvent::QuantityDecreased(e) => {
                if let Some(entry) = self.entry_mut(e.product_id) {
                    entry.quantity = entry.quantity.saturating_sub(1).max(1);
                }
            }
            CartEvent::ItemRemoved(e) => {
                self.entries.retain(|entry| entry.id() != e.product_id);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = match command {
            CartCommand::AddToCart(cmd) => self.handle_add(cmd),
            CartCommand::IncreaseQuantity(cmd) => self.handle_increase(cmd),
            CartCommand::DecreaseQuantity(cmd) => self.handle_decrease(cmd),
            CartCommand::RemoveFromCart(cmd) => self.handle_remove(cmd),
        };
        Ok(events.into_iter().collect())
    }
}

// Every handler answers a no-op with `None`: missing ids and out-of-range
// quantities are silently ignored rather than rejected.
impl Cart {
    fn handle_add(&self, cmd: &AddToCart) -> Option<CartEvent> {
        if self.contains(cmd.product.id) {
            return None;
        }
        Some(CartEvent::ItemAdded(ItemAdded {
            product: cmd.product.clone(),
        }))
    }

    fn handle_increase(&self, cmd: &IncreaseQuantity) -> Option<CartEvent> {
        let entry = self.entry(cmd.product_id)?;
        if entry.quantity == u32::MAX {
            return None;
        }
        Some(CartEvent::QuantityIncreased(QuantityIncreased {
            product_id: cmd.product_id,
        }))
    }

    fn handle_decrease(&self, cmd: &DecreaseQuantity) -> Option<CartEvent> {
        let entry = self.entry(cmd.product_id)?;
        if entry.quantity <= 1 {
            return None;
        }
        Some(CartEvent::QuantityDecreased(QuantityDecreased {
            product_id: cmd.product_id,
        }))
    }

    fn handle_remove(&self, cmd: &RemoveFromCart) -> Option<CartEvent> {
        self.entry(cmd.product_id)?;
        Some(CartEvent::ItemRemoved(ItemRemoved {
            product_id: cmd.product_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantshop_catalog::Catalog;
    use plantshop_events::execute;

    fn plant(id: u32) -> Product {
        Catalog::plants().get(ProductId::new(id)).cloned().unwrap()
    }

    fn run(cart: &mut Cart, command: CartCommand) -> Vec<CartEvent> {
        match execute(cart, &command) {
            Ok(events) => events,
            Err(never) => match never {},
        }
    }

    #[test]
    fn add_emits_item_added_for_new_product() {
        let cart = Cart::empty();
        let events = cart.handle(&CartCommand::add(plant(1))).unwrap();
        assert_eq!(events.len(), 1);

        match &events[0] {
            CartEvent::ItemAdded(e) => assert_eq!(e.product.name, "Snake Plant"),
            _ => panic!("Expected ItemAdded event"),
        }
    }

    #[test]
    fn add_appends_with_quantity_one_in_insertion_order() {
        let mut cart = Cart::empty();
        run(&mut cart, CartCommand::add(plant(3)));
        run(&mut cart, CartCommand::add(plant(1)));

        let ids: Vec<u32> = cart.entries().iter().map(|e| e.id().get()).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(cart.entries().iter().all(|e| e.quantity == 1));
    }

    #[test]
    fn add_of_existing_product_is_a_no_op() {
        let mut cart = Cart::empty();
        run(&mut cart, CartCommand::add(plant(1)));
        run(&mut cart, CartCommand::increase(ProductId::new(1)));
        let before = cart.clone();

        let events = run(&mut cart, CartCommand::add(plant(1)));
        assert!(events.is_empty());
        assert_eq!(cart, before);
        assert_eq!(cart.entry(ProductId::new(1)).unwrap().quantity, 2);
    }

    #[test]
    fn increase_missing_id_is_a_no_op() {
        let mut cart = Cart::empty();
        run(&mut cart, CartCommand::add(plant(2)));
        let before = cart.clone();

        assert!(run(&mut cart, CartCommand::increase(ProductId::new(9))).is_empty());
        assert_eq!(cart, before);
    }

    #[test]
    fn increase_at_the_quantity_ceiling_is_a_no_op() {
        let mut cart = Cart {
            entries: vec![CartEntry {
                product: plant(1),
                quantity: u32::MAX,
            }],
            version: 1,
        };
        let before = cart.clone();

        let events = cart.handle(&CartCommand::increase(ProductId::new(1))).unwrap();
        assert!(events.is_empty());

        run(&mut cart, CartCommand::increase(ProductId::new(1)));
        assert_eq!(cart, before);
        assert_eq!(cart.total_items(), u64::from(u32::MAX));
    }

    #[test]
    fn decrease_floors_at_one_without_removing() {
        let mut cart = Cart::empty();
        run(&mut cart, CartCommand::add(plant(1)));
        run(&mut cart, CartCommand::increase(ProductId::new(1)));

        assert_eq!(run(&mut cart, CartCommand::decrease(ProductId::new(1))).len(), 1);
        assert_eq!(cart.entry(ProductId::new(1)).unwrap().quantity, 1);

        let before = cart.clone();
        assert!(run(&mut cart, CartCommand::decrease(ProductId::new(1))).is_empty());
        assert_eq!(cart, before);
        assert!(cart.contains(ProductId::new(1)));
    }

    #[test]
    fn decrease_missing_id_is_a_no_op() {
        let mut cart = Cart::empty();
        assert!(run(&mut cart, CartCommand::decrease(ProductId::new(1))).is_empty());
        assert_eq!(cart.version(), 0);
    }

    #[test]
    fn remove_deletes_only_the_matching_entry() {
        let mut cart = Cart::empty();
        for id in [1, 2, 3] {
            run(&mut cart, CartCommand::add(plant(id)));
        }

        run(&mut cart, CartCommand::remove(ProductId::new(2)));
        let ids: Vec<u32> = cart.entries().iter().map(|e| e.id().get()).collect();
        assert_eq!(ids, vec![1, 3]);

        let before = cart.clone();
        assert!(run(&mut cart, CartCommand::remove(ProductId::new(2))).is_empty());
        assert_eq!(cart, before);
    }

    #[test]
    fn totals_follow_quantities_and_prices() {
        let mut cart = Cart::empty();
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_cost(), Price::ZERO);

        run(&mut cart, CartCommand::add(plant(1))); // 350
        run(&mut cart, CartCommand::add(plant(4))); // 200
        run(&mut cart, CartCommand::increase(ProductId::new(4)));
        run(&mut cart, CartCommand::increase(ProductId::new(4)));

        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_cost(), Price::new(350 + 3 * 200));
        assert_eq!(cart.entry(ProductId::new(4)).unwrap().line_total(), Price::new(600));
    }

    #[test]
    fn version_only_moves_when_an_event_applies() {
        let mut cart = Cart::empty();
        run(&mut cart, CartCommand::add(plant(1)));
        assert_eq!(cart.version(), 1);

        run(&mut cart, CartCommand::add(plant(1)));
        run(&mut cart, CartCommand::decrease(ProductId::new(1)));
        assert_eq!(cart.version(), 1);

        run(&mut cart, CartCommand::increase(ProductId::new(1)));
        assert_eq!(cart.version(), 2);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let mut cart = Cart::empty();
        run(&mut cart, CartCommand::add(plant(1)));
        let before = cart.clone();

        let events1 = cart.handle(&CartCommand::increase(ProductId::new(1))).unwrap();
        let events2 = cart.handle(&CartCommand::increase(ProductId::new(1))).unwrap();

        assert_eq!(cart, before);
        assert_eq!(events1, events2);
    }

    #[test]
    fn event_types_are_stable() {
        let id = ProductId::new(1);
        assert_eq!(CartEvent::ItemAdded(ItemAdded { product: plant(1) }).event_type(), "cart.item.added");
        assert_eq!(
            CartEvent::QuantityIncreased(QuantityIncreased { product_id: id }).event_type(),
            "cart.item.quantity_increased"
        );
        assert_eq!(
            CartEvent::QuantityDecreased(QuantityDecreased { product_id: id }).event_type(),
            "cart.item.quantity_decreased"
        );
        assert_eq!(CartEvent::ItemRemoved(ItemRemoved { product_id: id }).event_type(), "cart.item.removed");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u32),
            Increase(u32),
            Decrease(u32),
            Remove(u32),
        }

        impl Op {
            fn command(&self) -> CartCommand {
                match *self {
                    Op::Add(id) => CartCommand::add(plant(id)),
                    Op::Increase(id) => CartCommand::increase(ProductId::new(id)),
                    Op::Decrease(id) => CartCommand::decrease(ProductId::new(id)),
                    Op::Remove(id) => CartCommand::remove(ProductId::new(id)),
                }
            }
        }

        // Ids 0 and 7 are never in the catalog, so they exercise the missing-id paths.
        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (1u32..=6).prop_map(Op::Add),
                (0u32..=7).prop_map(Op::Increase),
                (0u32..=7).prop_map(Op::Decrease),
                (0u32..=7).prop_map(Op::Remove),
            ]
        }

        fn build(ops: &[Op]) -> Cart {
            let mut cart = Cart::empty();
            for op in ops {
                run(&mut cart, op.command());
            }
            cart
        }

        fn without(cart: &Cart, id: ProductId) -> Vec<CartEntry> {
            cart.entries().iter().filter(|e| e.id() != id).cloned().collect()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: any sequence keeps one entry per id, quantities >= 1,
            /// and totals equal to their definitions.
            #[test]
            fn invariants_hold_after_any_sequence(ops in prop::collection::vec(op(), 0..40)) {
                let cart = build(&ops);

                let mut ids: Vec<ProductId> = cart.entries().iter().map(Entity::id).collect();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), cart.len());
                prop_assert!(cart.entries().iter().all(|e| e.quantity >= 1));

                let items: u64 = cart.entries().iter().map(|e| u64::from(e.quantity)).sum();
                let cost: u64 = cart
                    .entries()
                    .iter()
                    .map(|e| u64::from(e.quantity) * e.product.price.minor_units())
                    .sum();
                prop_assert_eq!(cart.total_items(), items);
                prop_assert_eq!(cart.total_cost(), Price::new(cost));
            }

            /// Property: adding a product appends exactly one entry (qty 1) when
            /// absent and leaves the cart untouched when present.
            #[test]
            fn add_appends_or_is_a_no_op(ops in prop::collection::vec(op(), 0..30), id in 1u32..=6) {
                let mut cart = build(&ops);
                let before = cart.clone();
                let product_id = ProductId::new(id);

                run(&mut cart, CartCommand::add(plant(id)));

                if before.contains(product_id) {
                    prop_assert_eq!(&cart, &before);
                } else {
                    prop_assert_eq!(cart.len(), before.len() + 1);
                    prop_assert_eq!(&cart.entries()[..before.len()], before.entries());
                    let added = &cart.entries()[before.len()];
                    prop_assert_eq!(added.id(), product_id);
                    prop_assert_eq!(added.quantity, 1);
                }
            }

            /// Property: increase bumps exactly one quantity by one, or is a no-op.
            #[test]
            fn increase_changes_exactly_one_quantity(ops in prop::collection::vec(op(), 0..30), id in 0u32..=7) {
                let mut cart = build(&ops);
                let before = cart.clone();
                let product_id = ProductId::new(id);

                run(&mut cart, CartCommand::increase(product_id));

                match before.entry(product_id) {
                    Some(entry) => {
                        prop_assert_eq!(cart.entry(product_id).unwrap().quantity, entry.quantity + 1);
                        prop_assert_eq!(without(&cart, product_id), without(&before, product_id));
                        prop_assert_eq!(cart.total_items(), before.total_items() + 1);
                    }
                    None => prop_assert_eq!(&cart, &before),
                }
            }

            /// Property: decrease lowers a quantity above one by one, otherwise no-op.
            #[test]
            fn decrease_never_drops_below_one(ops in prop::collection::vec(op(), 0..30), id in 0u32..=7) {
                let mut cart = build(&ops);
                let before = cart.clone();
                let product_id = ProductId::new(id);

                run(&mut cart, CartCommand::decrease(product_id));

                match before.entry(product_id) {
                    Some(entry) if entry.quantity > 1 => {
                        prop_assert_eq!(cart.entry(product_id).unwrap().quantity, entry.quantity - 1);
                        prop_assert_eq!(without(&cart, product_id), without(&before, product_id));
                    }
                    _ => prop_assert_eq!(&cart, &before),
                }
            }

            /// Property: remove deletes exactly the matching entry and keeps order.
            #[test]
            fn remove_keeps_the_rest_in_order(ops in prop::collection::vec(op(), 0..30), id in 0u32..=7) {
                let mut cart = build(&ops);
                let before = cart.clone();
                let product_id = ProductId::new(id);

                run(&mut cart, CartCommand::remove(product_id));

                prop_assert!(!cart.contains(product_id));
                prop_assert_eq!(cart.entries().to_vec(), without(&before, product_id));
                if !before.contains(product_id) {
                    prop_assert_eq!(&cart, &before);
                }
            }
        }
    }
}
