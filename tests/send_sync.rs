//! Based on: https://github.com/tokio-rs/tokio/blob/d74d17307dd53215061c4a8a1f20a0e30461e296/tokio/tests/async_send_sync.rs

#![warn(rust_2018_idioms)]

use std::{any::Any, cell::Cell};
use std::rc::Rc;

use bintree::{Tree, Node, tree};

fn require_send<T: Send>(_t: &T) {}
fn require_sync<T: Sync>(_t: &T) {}

struct NotSend {
    _a: Box<dyn Any + Sync>,
}

struct Invalid;

trait AmbiguousIfSend<A> {
    fn some_item(&self) {}
}
impl<T: ?Sized> AmbiguousIfSend<()> for T {}
impl<T: ?Sized + Send> AmbiguousIfSend<Invalid> for T {}

trait AmbiguousIfSync<A> {
    fn some_item(&self) {}
}
impl<T: ?Sized> AmbiguousIfSync<()> for T {}
impl<T: ?Sized + Sync> AmbiguousIfSync<Invalid> for T {}

macro_rules! assert_value {
    ($type:ty: Send & Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            require_send(&f);
            require_sync(&f);
        };
    };
    ($type:ty: !Send & Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            AmbiguousIfSend::some_item(&f);
            require_sync(&f);
        };
    };
    ($type:ty: Send & !Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            require_send(&f);
            AmbiguousIfSync::some_item(&f);
        };
    };
    ($type:ty: !Send & !Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            AmbiguousIfSend::some_item(&f);
            AmbiguousIfSync::some_item(&f);
        };
    };
}

assert_value!(Tree<i32>: Send & Sync);
assert_value!(Tree<Rc<i32>>: !Send & !Sync);
assert_value!(Tree<Cell<i32>>: Send & !Sync);
assert_value!(Tree<NotSend>: !Send & Sync);

assert_value!(Node<i32>: Send & Sync);
assert_value!(Node<Rc<i32>>: !Send & !Sync);
assert_value!(Node<Cell<i32>>: Send & !Sync);
assert_value!(Node<NotSend>: !Send & Sync);

// Shared traversals only hold `&Node<T>`, so they are `Send` whenever `T: Sync`
assert_value!(tree::IterPreorder<'_, i32>: Send & Sync);
assert_value!(tree::IterPreorder<'_, Rc<i32>>: !Send & !Sync);
assert_value!(tree::IterPreorder<'_, Cell<i32>>: !Send & !Sync);
assert_value!(tree::IterPreorder<'_, NotSend>: Send & Sync);

assert_value!(tree::IterInorder<'_, i32>: Send & Sync);
assert_value!(tree::IterInorder<'_, Rc<i32>>: !Send & !Sync);
assert_value!(tree::IterInorder<'_, Cell<i32>>: !Send & !Sync);
assert_value!(tree::IterInorder<'_, NotSend>: Send & Sync);

assert_value!(tree::IterPostorder<'_, i32>: Send & Sync);
assert_value!(tree::IterPostorder<'_, Rc<i32>>: !Send & !Sync);
assert_value!(tree::IterPostorder<'_, Cell<i32>>: !Send & !Sync);
assert_value!(tree::IterPostorder<'_, NotSend>: Send & Sync);

assert_value!(tree::IterMutPreorder<'_, i32>: Send & Sync);
assert_value!(tree::IterMutPreorder<'_, Rc<i32>>: !Send & !Sync);
assert_value!(tree::IterMutPreorder<'_, Cell<i32>>: Send & !Sync);
assert_value!(tree::IterMutPreorder<'_, NotSend>: !Send & Sync);

assert_value!(tree::IntoIterPreorder<i32>: Send & Sync);
assert_value!(tree::IntoIterPreorder<Rc<i32>>: !Send & !Sync);
assert_value!(tree::IntoIterPreorder<Cell<i32>>: Send & !Sync);
assert_value!(tree::IntoIterPreorder<NotSend>: !Send & Sync);
