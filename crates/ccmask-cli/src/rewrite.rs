//! Argument rewriting for the wrapped compiler.
//!
//! The gcc-mp variants named by the mask reject a handful of Apple-specific
//! driver flags, so those are stripped before forwarding: `-arch <value>`
//! (flag and value), and both spellings of the dynamic-no-pic codegen toggle.
//! Mac-only sources also use the `__private_extern__` keyword, which the
//! wrapped compiler is taught to ignore by defining it to nothing.

/// Macro definition prepended to every forwarded invocation.
pub const PRIVATE_EXTERN_DEFINE: &str = "-D__private_extern__=";

/// Flag whose value selects a target CPU architecture; dropped with its value.
const ARCH_FLAG: &str = "-arch";

/// Codegen toggles the wrapped compiler does not accept; dropped alone.
const DYNAMIC_NO_PIC_FLAGS: [&str; 2] = ["-mno-dynamic-no-pic", "-mdynamic-no-pic"];

/// Build the forwarded argument list from the caller's compiler flags.
///
/// Single left-to-right pass; retained flags keep their relative order.
pub fn rewrite_flags(flags: &[String]) -> Vec<String> {
    let mut forwarded = Vec::with_capacity(flags.len() + 1);
    forwarded.push(PRIVATE_EXTERN_DEFINE.to_string());

    let mut iter = flags.iter();
    while let Some(flag) = iter.next() {
        if flag == ARCH_FLAG {
            // The architecture value is consumed unconditionally, whatever
            // its spelling.
            iter.next();
            continue;
        }
        if DYNAMIC_NO_PIC_FLAGS.contains(&flag.as_str()) {
            continue;
        }
        forwarded.push(flag.clone());
    }

    forwarded
}
