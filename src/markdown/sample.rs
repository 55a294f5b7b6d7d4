/// Document rendered when no input file is given
pub const SAMPLE_MARKDOWN: &str = r#"# Title

## Paragraph (wrapped to terminal width, break on word boundaries)

Call me Ishmael. Some years ago—never mind how long precisely — having little or no money in my purse, and nothing particular to interest me on shore, I thought I would sail about a little and see the watery part of the world. It is a way I have of driving off the spleen and regulating the circulation. Whenever I find myself growing grim about the mouth; whenever it is a damp, drizzly November in my soul; whenever I find myself involuntarily pausing before coffin warehouses, and bringing up the rear of every funeral I meet; and especially whenever my hypos get such an upper hand of me, that it requires a strong moral principle to prevent me from deliberately stepping into the street, and methodically knocking people’s hats off—then, I account it high time to get to sea as soon as I can.

## Misc Text Styles

Bold: **Now is the winter of our discontent**

Italic: _Made glorious summer by this sun of York_

Strikethrough: ~~And all the clouds that lour'd upon our house~~

Inline code: `let answer = 42;`

## Unordered List

* list item 1
* list item 2
* list item 3

## Ordered List

1. foo
1. bar
1. baz

## Block Quote

> The only thing we have to fear
>
> is fear itself.
>
> — Franklin D. Roosevelt

## Link

Here's a [Link](http://example.com) to example.com.

## Code Block

```c
#include <stdio.h>

int main(int argc, char **argv) {
    printf("Hello, World!\n");
    return 0;
}
```
"#;
