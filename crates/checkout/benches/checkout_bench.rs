use cart::SessionManager;
use catalog::Store;
use checkout::CheckoutService;
use common::{CustomerId, Money, ProductId};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::Product;

fn service_with_stock() -> CheckoutService {
    let store = Store::with_products((1..=20).map(|id| {
        Product::new(
            id,
            format!("Product {id}"),
            "Benchmark product",
            Money::from_cents(2500),
            u32::MAX,
        )
    }))
    .unwrap();
    CheckoutService::new(store, SessionManager::new())
}

fn bench_add_to_cart(c: &mut Criterion) {
    let service = service_with_stock();
    let customer = CustomerId::new(1);

    c.bench_function("checkout/add_to_cart_merge", |b| {
        b.iter(|| {
            service
                .sessions()
                .add_to_cart(customer, ProductId::new(1), "Product 1", Money::from_cents(2500), 1)
                .unwrap();
        });
    });
}

fn bench_full_checkout(c: &mut Criterion) {
    let service = service_with_stock();
    let customer = CustomerId::new(1);

    c.bench_function("checkout/add_five_lines_and_checkout", |b| {
        b.iter(|| {
            for id in 1..=5 {
                let product = service.store().find_by_id(ProductId::new(id)).unwrap();
                service.sessions().add_product(customer, &product, 2).unwrap();
            }
            service.checkout(customer).unwrap();
        });
    });
}

criterion_group!(benches, bench_add_to_cart, bench_full_checkout);
criterion_main!(benches);
