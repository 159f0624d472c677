use core::arch::global_asm;

// Nothing is set up for us: no stack, no zeroed .bss.
global_asm!(
    r#"
    .section .text.entry
    .globl _start
_start:
    la   sp, _stack_top

    /* Zero .bss */
    la   t0, __bss_start
    la   t1, __bss_end
1:
    bgeu t0, t1, 2f
    sd   zero, 0(t0)
    addi t0, t0, 8
    j    1b
2:
    /* rust_main never returns */
    call rust_main
"#
);
