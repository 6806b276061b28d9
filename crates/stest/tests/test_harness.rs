use stest::{add_test, check, check_eq, check_ne, check_str_eq, check_str_ne, Runner, Suite};

stest::test_main!(setup);

fn setup(runner: &mut Runner) -> anyhow::Result<()> {
    let mut vec_suite = Suite::new("vec")?;
    add_test!(vec_suite, resize_bigger)?;
    add_test!(vec_suite, resize_smaller)?;

    let mut str_suite = Suite::new("str")?;
    add_test!(str_suite, owned_and_borrowed)?;
    add_test!(str_suite, sub::concat)?;

    runner.add_suites(vec![vec_suite, str_suite])?;
    Ok(())
}

stest::test_case! {
    fn resize_bigger() {
        let mut vec = vec![0usize; 5];
        check_eq!(vec.len(), 5);
        check!(vec.capacity() >= 5);

        vec.resize(10, 0);
        check_eq!(vec.len(), 10);
        check!(vec.capacity() >= 10);
    }
}

#[allow(clippy::len_zero)]
fn resize_smaller() {
    let mut vec = vec![0usize; 10];
    vec.resize(0, 0);
    check!(vec.len() == 0);
    check!(vec.capacity() >= 10);
}

fn owned_and_borrowed() {
    let owned = String::from("rye");
    check_str_eq!(owned, "rye");
    check_str_ne!(owned, "ryE");
    check_ne!(owned.len(), 0);
}

mod sub {
    use stest::check_str_eq;

    pub(crate) fn concat() {
        let s = ["a", "b", "c"].concat();
        check_str_eq!(s, "abc");
    }
}
