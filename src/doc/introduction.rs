/*!
# Introduction to Tiny BASIC

Tiny BASIC is not a program you run on its own. It is a small interpreter
you place inside another program, the host, and hand a BASIC program as
a piece of text. The host decides when lines run and what `PRINT`,
`INPUT`, `PEEK`, `POKE` and `USER` actually do.

## A first program

Every line starts with a line number. Lines run in the order they
appear in the text; the numbers are only targets for `GOTO` and `GOSUB`
and do not need to be sorted.

```text
10 print "Hello World"
20 end
```

Keywords may be written in upper or lower case. `PRINT` hands the string
to the host, which usually writes it somewhere a person can read it.

## Variables

There are twenty six variables, `A` through `Z`. Each holds a 32-bit
signed integer and starts at zero. `a` and `A` are the same variable.

```text
10 a=6*7
20 print "The answer is ";a
```

## Loops and subroutines

```text
10 for i=1 to 3
20 gosub 100
30 next i
40 end
100 print i,i*i
110 return
```

`FOR` counts a variable up by one until it passes the bound. `GOSUB`
jumps to a line and `RETURN` comes back to the line after it.

## Embedding

```text
let mut runtime = Runtime::new(program, host);
while !runtime.is_finished() {
    runtime.step()?;
}
```

Each call to `step` runs exactly one line, so a host can interleave
BASIC with its own work, or use `execute` to run a bounded number of
lines at a time.

*/
