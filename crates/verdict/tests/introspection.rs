#![allow(deprecated)]

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use serde_json::json;
use verdict::{
    assert_has_attr, assert_is_async_function, assert_is_coroutine, assert_is_data_descriptor,
    assert_is_discriptor, assert_is_file_descriptor, assert_is_generator_function,
    assert_is_instance, assert_is_io, assert_is_iterable, assert_is_not_discriptor,
    assert_is_subclass, assert_not_is_subclass, check_has_attr, check_is_async_function,
    check_is_async_generator_function, check_is_coroutine, check_is_coroutine_function,
    check_is_data_descriptor, check_is_descriptor, check_is_file_descriptor,
    check_is_generator_function, check_is_generator_object, check_is_instance, check_is_io,
    check_is_iterable, check_is_iterator, check_is_not_coroutine,
    check_is_not_coroutine_function, check_is_not_descriptor, check_is_not_generator_function,
    check_is_not_generator_object, check_is_not_instance, check_is_not_iterator,
    check_is_subclass, check_not_is_subclass, AssertionFailure, Class, Descriptor, Probe,
};

struct Ticks(u8);

impl Stream for Ticks {
    type Item = u8;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<u8>> {
        if self.0 == 0 {
            return Poll::Ready(None);
        }
        self.0 -= 1;
        Poll::Ready(Some(self.0))
    }
}

async fn load(key: &'static str) -> usize {
    key.len()
}

fn squares(limit: u32) -> impl Iterator<Item = u32> {
    (0..limit).map(|n| n * n)
}

fn ticks(count: u8) -> Ticks {
    Ticks(count)
}

fn double(n: u32) -> u32 {
    n * 2
}

#[derive(Debug, Default)]
struct Account {
    owner: String,
    balance: i64,
}

#[test]
fn coroutine_functions_and_coroutines() -> Result<(), AssertionFailure> {
    let async_fn = Probe::coroutine_function("load", &load);
    check_is_coroutine_function(&async_fn)?;
    check_is_async_function(&async_fn)?;
    check_is_not_coroutine_function(Probe::function("double", &double))?;

    let failure = check_is_coroutine_function(Probe::function("double", &double)).unwrap_err();
    assert_eq!(
        failure.message(),
        "<function double/1> is not a coroutine function"
    );
    let failure = check_is_not_coroutine_function(&async_fn).unwrap_err();
    assert_eq!(
        failure.message(),
        "<coroutine function load/1> is a coroutine function"
    );

    let pending = load("k");
    check_is_coroutine(Probe::coroutine(&pending))?;
    check_is_not_coroutine(&async_fn)?;
    assert_is_coroutine(Probe::coroutine(&async { 1 }));
    Ok(())
}

#[test]
fn async_covers_both_async_kinds() -> Result<(), AssertionFailure> {
    let stream_fn = Probe::async_generator_function("ticks", &ticks);
    check_is_async_function(&stream_fn)?;
    check_is_async_generator_function(&stream_fn)?;
    assert!(check_is_coroutine_function(&stream_fn).is_err());

    let failure = check_is_async_function(Probe::function("double", &double)).unwrap_err();
    assert_eq!(failure.message(), "<function double/1> is not async");
    assert_is_async_function(Probe::coroutine_function("later", &|| async { 2 }));
    Ok(())
}

#[test]
fn generators_are_iterators() -> Result<(), AssertionFailure> {
    let gen_fn = Probe::generator_function("squares", &squares);
    check_is_generator_function(&gen_fn)?;
    check_is_not_generator_function(Probe::function("double", &double))?;
    assert_is_generator_function(&gen_fn);

    let generator = Probe::generator(&squares(3));
    check_is_generator_object(&generator)?;
    check_is_iterator(&generator)?;
    check_is_iterable(&generator)?;
    check_is_not_generator_object(Probe::iterator(&[1, 2].iter()))?;

    let failure = check_is_generator_object(vec![1]).unwrap_err();
    assert_eq!(failure.message(), "[1] is not a generator");
    Ok(())
}

#[test]
fn iterators_and_iterables_differ() -> Result<(), AssertionFailure> {
    check_is_iterable(vec![1, 2])?;
    check_is_iterable("text")?;
    check_is_iterable(json!([1]))?;
    check_is_not_iterator(vec![1, 2])?;
    check_is_iterator(Probe::iterator(&"ab".chars()))?;
    assert!(check_is_iterator(Probe::async_generator(&ticks(1))).is_err());

    let failure = check_is_iterable(5).unwrap_err();
    assert_eq!(failure.message(), "5 is not iterable");
    assert_is_iterable(Probe::iterable(&vec!["a"]));
    Ok(())
}

#[test]
fn descriptors_report_their_setter() -> Result<(), AssertionFailure> {
    let owner: Descriptor<Account, String> = Descriptor::getter("owner", |a| a.owner.clone());
    let balance = Descriptor::getter("balance", |a: &Account| a.balance)
        .with_setter(|a, v| a.balance = v);

    check_is_descriptor(&owner)?;
    check_is_descriptor(&balance)?;
    check_is_data_descriptor(&balance)?;
    assert!(check_is_data_descriptor(&owner).is_err());
    check_is_not_descriptor(3)?;

    let failure = check_is_descriptor("owner").unwrap_err();
    assert_eq!(failure.message(), "\"owner\" is not a descriptor");
    assert_is_data_descriptor(&balance);
    assert_is_discriptor(&owner);
    assert_is_not_discriptor(Probe::value(&1));

    let mut account = Account::default();
    balance.set(&mut account, 40).expect("setter present");
    assert_eq!(balance.get(&account), 40);
    assert!(owner.set(&mut account, "ann".into()).is_err());
    Ok(())
}

#[test]
fn attributes_files_and_io() -> Result<(), AssertionFailure> {
    check_has_attr(json!({"id": 1}), "id")?;
    check_has_attr(Class::object(), "bases")?;
    let failure = check_has_attr(Probe::value(&1), "real").unwrap_err();
    assert_eq!(failure.message(), "1 does not have the attribute real");
    assert_eq!(failure.info().context["attribute"], "real");
    assert_has_attr(Probe::instance(&Class::declare("Point", &[]), "Point(0, 0)").with_attr("x"), "x");

    check_is_file_descriptor(0)?;
    check_is_file_descriptor(json!(2))?;
    let failure = check_is_file_descriptor(-1).unwrap_err();
    assert_eq!(failure.message(), "-1 is not a file descriptor");
    assert!(check_is_file_descriptor("stdin").is_err());
    assert_is_file_descriptor(3_u16);

    check_is_io(io::stdout())?;
    check_is_io(io::Cursor::new(vec![0_u8]))?;
    check_is_io(Probe::reader(&io::empty()))?;
    let failure = check_is_io(vec![0_u8]).unwrap_err();
    assert_eq!(failure.message(), "[0] is not an IO object");
    assert_is_io(io::sink());
    Ok(())
}

#[test]
fn instances_follow_declared_bases() -> Result<(), AssertionFailure> {
    let shape = Class::declare("Shape", &[]);
    let circle = Class::declare("Circle", &[shape.clone()]);
    let unit = Probe::instance(&circle, "Circle(1)");

    check_is_instance(&circle, &unit)?;
    check_is_instance(&shape, &unit)?;
    check_is_instance(&Class::object(), &unit)?;
    check_is_instance(&Class::of::<i32>(), 7)?;
    check_is_not_instance(&Class::of::<i32>(), 7_u8)?;

    let failure = check_is_instance(&Class::of::<String>(), 7).unwrap_err();
    assert_eq!(failure.message(), "7 is not an instance of <class 'alloc::string::String'>");
    assert_eq!(failure.info().context["class"], "i32");

    check_is_subclass(&shape, &circle)?;
    check_is_subclass(&circle, &circle)?;
    check_not_is_subclass(&circle, &shape)?;
    let failure = check_is_subclass(&circle, &shape).unwrap_err();
    assert_eq!(
        failure.message(),
        "<class 'Shape'> is not a subclass of <class 'Circle'>"
    );

    assert_is_instance(&Class::builtin("function"), Probe::function("double", &double));
    assert_is_subclass(&Class::object(), &Class::of::<u8>());
    assert_not_is_subclass(&Class::of::<u8>(), &Class::object());
    Ok(())
}

#[test]
#[should_panic(expected = "is not an instance of")]
fn assert_is_instance_panics_on_unrelated_class() {
    assert_is_instance(&Class::declare("Widget", &[]), Probe::value(&"gear"));
}
